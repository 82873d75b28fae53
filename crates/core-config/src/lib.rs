//! Engine constants and tunable thresholds.
//!
//! Every numeric knob of the diagnostics engine lives here with its default
//! from the output contract: safe padding, out-of-bounds epsilon, minimum
//! overlap area, severity multipliers, the priority→minimum-font tier table,
//! and the advisory change budgets for high-priority elements. An optional
//! `slidedoctor.toml` overrides individual values; everything absent keeps its
//! default, and unknown fields are ignored (TOML deserialization tolerance)
//! so the file can grow without breaking older binaries.
//!
//! The raw parsed file is kept separate from the resolved [`EngineConfig`]:
//! resolution sorts the font tier table descending by priority (logging when
//! it had to reorder) and drops tiers with non-positive minimums. The engine
//! receives the resolved form, loaded once at startup, and never mutates it.
//!
//! Slide dimensions and safe padding are properties of the *documents* (the
//! extractor records what it measured); the constants here only seed schema
//! defaults and are not re-read by detectors.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub mod constants {
    //! Contract defaults. Tunable via `slidedoctor.toml`; these are the values
    //! used when no override is present.

    pub const SLIDE_W: f64 = 1280.0;
    pub const SLIDE_H: f64 = 720.0;
    pub const SAFE_PADDING: f64 = 8.0;
    /// Overshoot below this (in px) is measurement noise, not a defect.
    pub const OOB_EPS_PX: f64 = 1.0;
    /// Safe-box intersections smaller than this (px²) are ignored.
    pub const MIN_OVERLAP_AREA_PX: f64 = 100.0;
    /// Overlap severity multiplier when either element carries text.
    pub const TEXT_OVERLAP_SEVERITY_MULT: f64 = 2.0;
    /// A text box taller than `content × ratio` is suspiciously empty.
    pub const UNDERFLOW_RATIO: f64 = 1.5;
    /// Slack added to resize suggestions so the fix does not land exactly flush.
    pub const HINT_BUFFER_PX: f64 = 4.0;
    /// Planner-facing floor on content coverage of the slide area.
    pub const WHITESPACE_COVERAGE_MIN: f64 = 0.15;
    pub const TOPOLOGY_SEVERITY: i64 = 1000;
    pub const DEFAULT_Z_INDEX: i32 = 0;
    /// Descending `(priority threshold, min font px)` tiers.
    pub const MIN_FONT_BY_PRIORITY: [(i64, i64); 2] = [(90, 32), (50, 16)];
    /// Elements at or above this priority get advisory change budgets.
    pub const HIGH_PRIORITY_THRESHOLD: i64 = 90;
    pub const POSITION_BUDGET_PX: i64 = 32;
    pub const SIZE_BUDGET_PX: i64 = 16;
}

use constants::*;

/// One row of the minimum-font table: elements with `priority ≥ priority`
/// must render at `min_px` or larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontTier {
    pub priority: i64,
    pub min_px: i64,
}

// -------------------------------------------------------------------------------------------------
// Raw TOML shape
// -------------------------------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
struct ThresholdsSection {
    #[serde(default = "d_oob_eps")]
    oob_eps_px: f64,
    #[serde(default = "d_min_overlap")]
    min_overlap_area_px: f64,
    #[serde(default = "d_text_mult")]
    text_overlap_severity_mult: f64,
    #[serde(default = "d_underflow")]
    underflow_ratio: f64,
    #[serde(default = "d_hint_buffer")]
    hint_buffer_px: f64,
    #[serde(default = "d_coverage")]
    whitespace_coverage_min: f64,
    #[serde(default = "d_topology")]
    topology_severity: i64,
}

impl Default for ThresholdsSection {
    fn default() -> Self {
        Self {
            oob_eps_px: OOB_EPS_PX,
            min_overlap_area_px: MIN_OVERLAP_AREA_PX,
            text_overlap_severity_mult: TEXT_OVERLAP_SEVERITY_MULT,
            underflow_ratio: UNDERFLOW_RATIO,
            hint_buffer_px: HINT_BUFFER_PX,
            whitespace_coverage_min: WHITESPACE_COVERAGE_MIN,
            topology_severity: TOPOLOGY_SEVERITY,
        }
    }
}

fn d_oob_eps() -> f64 {
    OOB_EPS_PX
}
fn d_min_overlap() -> f64 {
    MIN_OVERLAP_AREA_PX
}
fn d_text_mult() -> f64 {
    TEXT_OVERLAP_SEVERITY_MULT
}
fn d_underflow() -> f64 {
    UNDERFLOW_RATIO
}
fn d_hint_buffer() -> f64 {
    HINT_BUFFER_PX
}
fn d_coverage() -> f64 {
    WHITESPACE_COVERAGE_MIN
}
fn d_topology() -> i64 {
    TOPOLOGY_SEVERITY
}

#[derive(Debug, Deserialize, Clone)]
struct FontsSection {
    /// `[[priority, min_px], …]`, highest priority first.
    #[serde(default = "d_tiers")]
    tiers: Vec<[i64; 2]>,
}

impl Default for FontsSection {
    fn default() -> Self {
        Self { tiers: d_tiers() }
    }
}

fn d_tiers() -> Vec<[i64; 2]> {
    MIN_FONT_BY_PRIORITY.iter().map(|&(p, m)| [p, m]).collect()
}

#[derive(Debug, Deserialize, Clone)]
struct BudgetSection {
    #[serde(default = "d_threshold")]
    high_priority_threshold: i64,
    #[serde(default = "d_pos_budget")]
    position_budget_px: i64,
    #[serde(default = "d_size_budget")]
    size_budget_px: i64,
}

impl Default for BudgetSection {
    fn default() -> Self {
        Self {
            high_priority_threshold: HIGH_PRIORITY_THRESHOLD,
            position_budget_px: POSITION_BUDGET_PX,
            size_budget_px: SIZE_BUDGET_PX,
        }
    }
}

fn d_threshold() -> i64 {
    HIGH_PRIORITY_THRESHOLD
}
fn d_pos_budget() -> i64 {
    POSITION_BUDGET_PX
}
fn d_size_budget() -> i64 {
    SIZE_BUDGET_PX
}

#[derive(Debug, Deserialize, Default, Clone)]
struct ConfigFile {
    #[serde(default)]
    thresholds: ThresholdsSection,
    #[serde(default)]
    fonts: FontsSection,
    #[serde(default)]
    budget: BudgetSection,
}

// -------------------------------------------------------------------------------------------------
// Resolved configuration
// -------------------------------------------------------------------------------------------------

/// Resolved, immutable engine tuning. Built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub oob_eps_px: f64,
    pub min_overlap_area_px: f64,
    pub text_overlap_severity_mult: f64,
    pub underflow_ratio: f64,
    pub hint_buffer_px: f64,
    pub whitespace_coverage_min: f64,
    pub topology_severity: i64,
    /// Sorted descending by `priority`.
    pub font_tiers: Vec<FontTier>,
    pub high_priority_threshold: i64,
    pub position_budget_px: i64,
    pub size_budget_px: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        ConfigFile::default().resolve()
    }
}

impl EngineConfig {
    /// Minimum font size for `priority`: the first tier (scanning highest
    /// threshold first) whose threshold is ≤ the priority. `None` when no
    /// tier applies — the element has no font floor.
    pub fn min_font_for_priority(&self, priority: i64) -> Option<i64> {
        self.font_tiers
            .iter()
            .find(|tier| tier.priority <= priority)
            .map(|tier| tier.min_px)
    }
}

impl ConfigFile {
    fn resolve(self) -> EngineConfig {
        let mut tiers: Vec<FontTier> = self
            .fonts
            .tiers
            .iter()
            .filter(|t| {
                if t[1] <= 0 {
                    warn!(target: "config", priority = t[0], min_px = t[1], "font_tier_dropped_nonpositive_min");
                    false
                } else {
                    true
                }
            })
            .map(|t| FontTier {
                priority: t[0],
                min_px: t[1],
            })
            .collect();
        let sorted = tiers.windows(2).all(|w| w[0].priority >= w[1].priority);
        if !sorted {
            tiers.sort_by(|a, b| b.priority.cmp(&a.priority));
            warn!(target: "config", "font_tiers_reordered_descending");
        }

        EngineConfig {
            oob_eps_px: self.thresholds.oob_eps_px,
            min_overlap_area_px: self.thresholds.min_overlap_area_px,
            text_overlap_severity_mult: self.thresholds.text_overlap_severity_mult,
            underflow_ratio: self.thresholds.underflow_ratio,
            hint_buffer_px: self.thresholds.hint_buffer_px,
            whitespace_coverage_min: self.thresholds.whitespace_coverage_min,
            topology_severity: self.thresholds.topology_severity,
            font_tiers: tiers,
            high_priority_threshold: self.budget.high_priority_threshold,
            position_budget_px: self.budget.position_budget_px,
            size_budget_px: self.budget.size_budget_px,
        }
    }
}

/// Best-effort config path following platform conventions (XDG / AppData
/// Roaming), preferring a local `slidedoctor.toml` first.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("slidedoctor.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("slidedoctor").join("slidedoctor.toml");
    }
    PathBuf::from("slidedoctor.toml")
}

/// Load the engine configuration from `path` (or the discovered location).
/// A missing file yields the defaults; a malformed file is an error — silent
/// fallback would hide a typo in a threshold the operator meant to change.
pub fn load_from(path: Option<PathBuf>) -> Result<EngineConfig> {
    let path = path.unwrap_or_else(discover);
    match fs::read_to_string(&path) {
        Ok(content) => {
            let file: ConfigFile = toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("config parse error in {}: {e}", path.display()))?;
            let cfg = file.resolve();
            info!(
                target: "config",
                path = %path.display(),
                tiers = cfg.font_tiers.len(),
                min_overlap_area_px = cfg.min_overlap_area_px,
                "config_loaded"
            );
            Ok(cfg)
        }
        Err(_) => {
            info!(target: "config", path = %path.display(), "config_missing_using_defaults");
            Ok(EngineConfig::default())
        }
    }
}
