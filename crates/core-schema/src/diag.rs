//! Diagnostics document: the engine's sole output.
//!
//! Defect kinds form a discriminated union on `type` with structurally
//! distinct per-variant details; exhaustive matching keeps new kinds honest.
//! Graph entities reference elements by `eid` string only — no object cycles;
//! callers resolve ids back through the DOM/IR documents they supplied.
//!
//! Wire shape notes:
//! - Kind and action identifiers serialise verbatim (`layout_topology`,
//!   `set_fontSize`, `move_up`, …) and are stable across releases.
//! - Optional fields are omitted when absent, never emitted as `null`.
//! - `summary.conflict_graph` is present iff at least one component exists.
//! - All pixel quantities are integers, rounded half away from zero at the
//!   point of construction.

use serde::{Deserialize, Serialize};

use crate::SchemaError;

// -------------------------------------------------------------------------------------------------
// Defects
// -------------------------------------------------------------------------------------------------

/// The defect families the detector pipeline can report, in fix-priority
/// order (highest first) — the same order the engine runs the detectors in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectKind {
    LayoutTopology,
    FontTooSmall,
    ContentOverflow,
    ContentUnderflow,
    OutOfBounds,
    Overlap,
}

/// Slide edge identifiers for out-of-bounds reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Per-kind structured details. Field sets are disjoint across variants, so
/// the untagged representation stays unambiguous on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefectDetails {
    OutOfBounds {
        edge: Edge,
        by_px: i64,
    },
    Topology {
        title_cy: i64,
        body_cy: i64,
    },
    FontTooSmall {
        font_size_px: i64,
        min_px: i64,
    },
    ContentOverflow {
        overflow_x_px: i64,
        overflow_y_px: i64,
    },
    ContentUnderflow {
        box_h_px: i64,
        content_h_px: i64,
    },
    Overlap {
        overlap_area_px: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        severity_note: Option<String>,
    },
}

/// A fixable violation of a layout rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defect {
    #[serde(rename = "type")]
    pub kind: DefectKind,
    /// Non-negative magnitude; summed across defects for the slide score.
    pub severity: i64,
    pub details: DefectDetails,
    /// Single-element defects name their element here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eid: Option<String>,
    /// Pair defects: the element a repair targets (lower priority of the two).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_eid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_eid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<Hint>,
}

// -------------------------------------------------------------------------------------------------
// Warnings
// -------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    OcclusionSuspected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningDetails {
    pub overlap_area_px: i64,
    /// The element stacked on top (higher z-index) in a suspected occlusion.
    pub top_eid: String,
}

/// A suspicious but not definitively wrong situation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub owner_eid: String,
    pub other_eid: String,
    pub details: WarningDetails,
}

// -------------------------------------------------------------------------------------------------
// Hints
// -------------------------------------------------------------------------------------------------

/// Repair vocabulary. Directional moves share identifiers with
/// [`SeparationDirection`] so a planner can correlate a hint with the
/// separation option it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintAction {
    MoveToTop,
    #[serde(rename = "set_fontSize")]
    SetFontSize,
    ShrinkContainer,
    GrowContainer,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl HintAction {
    /// Actions that move the target element.
    pub fn modifies_position(self) -> bool {
        matches!(
            self,
            Self::MoveToTop | Self::MoveUp | Self::MoveDown | Self::MoveLeft | Self::MoveRight
        )
    }

    /// Actions that resize the target element or its text.
    pub fn modifies_size(self) -> bool {
        matches!(
            self,
            Self::ShrinkContainer | Self::GrowContainer | Self::SetFontSize
        )
    }
}

/// Advisory change bounds attached to hints targeting high-priority elements.
/// The planner is expected to respect them; the engine does not re-clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub position_budget_px: i64,
    pub size_budget_px: i64,
}

/// A bounded one-axis repair suggestion attached to a defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    pub action: HintAction,
    /// Set to `true` only once the hint has passed validation and clamping.
    #[serde(default)]
    pub validated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_y: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_w: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_h: Option<i64>,
    #[serde(
        rename = "suggested_fontSize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub suggested_font_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_eid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
}

impl Hint {
    /// An unvalidated hint with every suggestion empty; detectors fill the
    /// axis they care about.
    pub fn new(action: HintAction) -> Self {
        Self {
            action,
            validated: false,
            reason: None,
            suggested_x: None,
            suggested_y: None,
            suggested_w: None,
            suggested_h: None,
            suggested_font_size: None,
            target_eid: None,
            budget: None,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Conflict graph
// -------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationDirection {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

/// One candidate one-axis move that would clear a specific overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparationOption {
    pub direction: SeparationDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_y: Option<i64>,
    pub cost_px: i64,
}

/// An overlap pair inside a conflict component, with its full set of
/// directional separation options sorted cheapest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictEdge {
    pub owner_eid: String,
    pub other_eid: String,
    pub overlap_area: i64,
    pub separations: Vec<SeparationOption>,
}

/// Free pixel distance from an element's safe box to the nearest non-group
/// obstacle (or slide edge) in each cardinal direction. All values ≥ 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceEnvelope {
    pub eid: String,
    pub free_top: i64,
    pub free_bottom: i64,
    pub free_left: i64,
    pub free_right: i64,
}

/// A connected set (≥ 2) of mutually-overlapping elements, reported as a unit
/// so a planner can reason about them jointly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictComponent {
    pub eids: Vec<String>,
    pub edges: Vec<ConflictEdge>,
    pub envelopes: Vec<SpaceEnvelope>,
}

// -------------------------------------------------------------------------------------------------
// Document
// -------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagSummary {
    pub defect_count: u64,
    pub total_severity: i64,
    pub warning_count: u64,
    pub warning_severity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_graph: Option<Vec<ConflictComponent>>,
}

/// The diagnostics document produced by one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagDocument {
    pub defects: Vec<Defect>,
    pub warnings: Vec<Warning>,
    pub summary: DiagSummary,
}

impl DiagDocument {
    pub fn from_json_str(s: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(s).map_err(SchemaError::Diag)
    }

    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        serde_json::to_string(self).map_err(SchemaError::Diag)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(SchemaError::Diag)
    }
}
