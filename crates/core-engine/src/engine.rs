//! The engine pass: detectors → hint pipeline → conflict graph → summary.

use core_config::EngineConfig;
use core_conflict::build_conflict_graph;
use core_detect::{
    detect_content_overflow, detect_font_too_small, detect_layout_topology, detect_out_of_bounds,
    detect_overlap,
};
use core_schema::{DiagDocument, DiagSummary, DomDocument, IrDocument, SlideView};
use tracing::{debug, info};

use crate::hint::{annotate_budgets, validate_hint};
use crate::severity::{total_severity, warning_severity};

/// Run the full diagnostics pass over one rendered slide.
///
/// Pure over its inputs: no engine state survives the call, and repeated
/// invocations with the same documents return deeply equal results.
pub fn diagnose(dom: &DomDocument, ir: &IrDocument, cfg: &EngineConfig) -> DiagDocument {
    let view = SlideView::join(dom, ir);
    debug!(
        target: "engine",
        dom_elements = dom.elements.len(),
        ir_elements = ir.elements.len(),
        joined = view.elements.len(),
        "documents_joined"
    );

    // Fixed order; defines reporting order and the planner's fix priority.
    let mut defects = Vec::new();
    defects.extend(detect_layout_topology(&view, cfg));
    defects.extend(detect_font_too_small(&view, cfg));
    defects.extend(detect_content_overflow(&view, cfg));
    defects.extend(detect_out_of_bounds(&view, cfg));
    let (overlap_defects, warnings) = detect_overlap(&view, cfg);
    defects.extend(overlap_defects);

    for defect in &mut defects {
        if let Some(hint) = defect.hint.as_mut() {
            validate_hint(hint, &view);
        }
    }
    annotate_budgets(&mut defects, &view, cfg);

    let components = build_conflict_graph(&defects, &view);

    let summary = DiagSummary {
        defect_count: defects.len() as u64,
        total_severity: total_severity(&defects),
        warning_count: warnings.len() as u64,
        warning_severity: warning_severity(&warnings),
        conflict_graph: (!components.is_empty()).then_some(components),
    };
    info!(
        target: "engine",
        defect_count = summary.defect_count,
        total_severity = summary.total_severity,
        warning_count = summary.warning_count,
        warning_severity = summary.warning_severity,
        conflict_components = summary.conflict_graph.as_ref().map_or(0, |c| c.len()),
        "diagnose_complete"
    );

    DiagDocument {
        defects,
        warnings,
        summary,
    }
}
