//! Diagnostics engine orchestration.
//!
//! `diagnose(dom, ir, config)` is the one public entry point of the whole
//! pipeline: it joins the documents, runs the detectors in their fixed order,
//! validates and budget-annotates every repair hint, builds the conflict
//! graph from the surviving overlap defects, and assembles the summary.
//!
//! Invariants:
//! - Detector order is fixed and defines reporting order (which doubles as
//!   fix priority for the external planner): `layout_topology`,
//!   `font_too_small`, `content_overflow`, `out_of_bounds`, `overlap`.
//! - Output is deterministic: the same documents and configuration produce a
//!   deeply equal diagnostics document on every call.
//! - The engine holds no state between invocations and performs no I/O; all
//!   observability is `tracing` events.

mod engine;
mod hint;
mod severity;

pub use engine::diagnose;
pub use hint::{annotate_budgets, validate_hint};
pub use severity::{total_severity, warning_severity};
