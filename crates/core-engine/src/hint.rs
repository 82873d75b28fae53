//! Hint validation, clamping, and budget annotation.
//!
//! Detectors emit hints with `validated: false`; nothing leaves the engine
//! unchecked. Validation is per-action structural completeness (the axis the
//! action moves must carry a suggestion) plus clamping into sane ranges:
//! positions inside the slide, dimensions and font sizes at least 1 px.
//! A hint that fails keeps `validated: false` and gains a `reason` — it stays
//! on the defect so the planner can see what the detector wanted and why the
//! engine would not endorse it.
//!
//! Budget annotation marks hints that would move or resize a high-priority
//! element with advisory pixel maxima. The engine does not re-clamp the
//! suggestion against the budget; planner feedback loops enforce budgets and
//! report overrides.

use core_schema::{Budget, Defect, Hint, HintAction, SlideView};
use core_config::EngineConfig;
use tracing::debug;

/// Structurally check and clamp one hint. Sets `validated` and, on failure,
/// `reason`.
pub fn validate_hint(hint: &mut Hint, view: &SlideView<'_>) {
    let complete = match hint.action {
        HintAction::MoveToTop | HintAction::MoveUp | HintAction::MoveDown => {
            hint.suggested_y.is_some()
        }
        HintAction::MoveLeft | HintAction::MoveRight => hint.suggested_x.is_some(),
        HintAction::SetFontSize => hint.suggested_font_size.is_some(),
        HintAction::ShrinkContainer | HintAction::GrowContainer => {
            hint.suggested_w.is_some() || hint.suggested_h.is_some()
        }
    };
    if !complete {
        hint.validated = false;
        hint.reason = Some("missing suggestion for action axis".into());
        return;
    }

    let max_x = view.slide.w.round() as i64;
    let max_y = view.slide.h.round() as i64;
    if let Some(x) = hint.suggested_x {
        let clamped = x.clamp(0, max_x);
        if clamped != x {
            debug!(target: "engine.hint", from = x, to = clamped, "suggested_x_clamped");
        }
        hint.suggested_x = Some(clamped);
    }
    if let Some(y) = hint.suggested_y {
        let clamped = y.clamp(0, max_y);
        if clamped != y {
            debug!(target: "engine.hint", from = y, to = clamped, "suggested_y_clamped");
        }
        hint.suggested_y = Some(clamped);
    }
    if let Some(w) = hint.suggested_w {
        hint.suggested_w = Some(w.max(1));
    }
    if let Some(h) = hint.suggested_h {
        hint.suggested_h = Some(h.max(1));
    }
    if let Some(fs) = hint.suggested_font_size {
        hint.suggested_font_size = Some(fs.max(1));
    }

    hint.validated = true;
    hint.reason = None;
}

/// Attach advisory change budgets to hints that move or resize an element at
/// or above the high-priority threshold.
pub fn annotate_budgets(defects: &mut [Defect], view: &SlideView<'_>, cfg: &EngineConfig) {
    for defect in defects.iter_mut() {
        let Some(hint) = defect.hint.as_mut() else {
            continue;
        };
        if !(hint.action.modifies_position() || hint.action.modifies_size()) {
            continue;
        }
        let target = hint
            .target_eid
            .as_deref()
            .or(defect.eid.as_deref())
            .or(defect.owner_eid.as_deref());
        let Some(el) = target.and_then(|eid| view.get(eid)) else {
            continue;
        };
        if el.priority() >= cfg.high_priority_threshold {
            hint.budget = Some(Budget {
                position_budget_px: cfg.position_budget_px,
                size_budget_px: cfg.size_budget_px,
            });
        }
    }
}
