//! Typed document shapes for the diagnostics pipeline.
//!
//! Three plain-data documents cross this crate's boundary:
//! - [`dom::DomDocument`] — per-element boxes and computed font metrics as
//!   measured by an external renderer (camelCase JSON keys, matching what the
//!   browser-side extractor emits).
//! - [`ir::IrDocument`] — the semantic intermediate representation: element
//!   types, priorities, intended layout, optional grouping.
//! - [`diag::DiagDocument`] — the engine's sole output: defects, warnings,
//!   summary, and (when non-empty) the conflict graph. snake_case JSON keys.
//!
//! Schema validation beyond shape is the caller's responsibility; parsing here
//! fills documented defaults (slide 1280×720, zIndex 0, safe padding 8) and
//! reconciles a missing `safeBox` from `bbox`, nothing more. Elements present
//! in only one of DOM/IR are not an error — [`resolve::SlideView`] joins the
//! two documents by `eid` and silently skips the unmatched.

pub mod diag;
pub mod dom;
pub mod ir;
pub mod resolve;

use thiserror::Error;

/// Errors surfaced while parsing one of the three pipeline documents.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("malformed DOM document: {0}")]
    Dom(#[source] serde_json::Error),
    #[error("malformed IR document: {0}")]
    Ir(#[source] serde_json::Error),
    #[error("malformed diagnostics document: {0}")]
    Diag(#[source] serde_json::Error),
}

pub use diag::{
    Budget, ConflictComponent, ConflictEdge, Defect, DefectDetails, DefectKind, DiagDocument,
    DiagSummary, Edge, Hint, HintAction, SeparationDirection, SeparationOption, SpaceEnvelope,
    Warning, WarningDetails, WarningKind,
};
pub use dom::{ComputedStyle, DomDocument, DomElement, SlideSize};
pub use ir::{ElementType, IrDocument, IrElement, IrLayout, IrStyle};
pub use resolve::{ElementView, SlideView};
