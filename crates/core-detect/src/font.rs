//! Minimum font size by priority tier.
//!
//! Applies to everything that renders text (not `image`, not `decoration`).
//! The floor comes from the descending priority→minPx tier table; an element
//! below every tier threshold has no floor and is skipped. Firing is strict:
//! a font exactly at the minimum passes.

use core_geometry::round_px;
use core_schema::{Defect, DefectDetails, DefectKind, ElementType, Hint, HintAction, SlideView};
use core_config::EngineConfig;

pub fn detect_font_too_small(view: &SlideView<'_>, cfg: &EngineConfig) -> Vec<Defect> {
    let mut defects = Vec::new();
    for el in &view.elements {
        if matches!(el.kind(), ElementType::Image | ElementType::Decoration) {
            continue;
        }
        let Some(min_px) = cfg.min_font_for_priority(el.priority()) else {
            continue;
        };
        let font_size = el.dom.computed.font_size;
        if font_size >= min_px as f64 {
            continue;
        }
        let mut hint = Hint::new(HintAction::SetFontSize);
        hint.suggested_font_size = Some(min_px);
        hint.target_eid = Some(el.eid().to_string());
        defects.push(Defect {
            kind: DefectKind::FontTooSmall,
            severity: round_px((min_px as f64 - font_size) * 10.0),
            details: DefectDetails::FontTooSmall {
                font_size_px: round_px(font_size),
                min_px,
            },
            eid: Some(el.eid().to_string()),
            owner_eid: None,
            other_eid: None,
            hint: Some(hint),
        });
    }
    defects
}
