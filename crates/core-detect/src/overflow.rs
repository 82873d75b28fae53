//! Content overflow and underflow against the element's own box.
//!
//! Overflow: the measured text content box escapes the element's bbox on the
//! right or bottom — text is being clipped or painting outside its container.
//! Both axes are measured independently and reported in one defect per
//! element; the severity is the total escaped distance.
//!
//! Underflow: a text-typed box more than `UNDERFLOW_RATIO` times taller than
//! its content is suspiciously empty and gets a `shrink_container` suggestion
//! sized to the content plus the hint buffer. Elements with no rendered
//! content (`contentBox` null) or degenerate content height are skipped —
//! nothing meaningful to compare against.

use core_geometry::round_px;
use core_schema::{Defect, DefectDetails, DefectKind, Hint, HintAction, SlideView};
use core_config::EngineConfig;

pub fn detect_content_overflow(view: &SlideView<'_>, cfg: &EngineConfig) -> Vec<Defect> {
    let mut defects = Vec::new();
    for el in &view.elements {
        let Some(cb) = el.dom.content_box else {
            continue;
        };
        let bbox = el.bbox();

        let overflow_x = round_px((cb.right() - bbox.right()).max(0.0));
        let overflow_y = round_px((cb.bottom() - bbox.bottom()).max(0.0));
        if overflow_x > 0 || overflow_y > 0 {
            let mut hint = Hint::new(HintAction::GrowContainer);
            if overflow_x > 0 {
                hint.suggested_w =
                    Some((cb.right() - bbox.x + cfg.hint_buffer_px).ceil() as i64);
            }
            if overflow_y > 0 {
                hint.suggested_h =
                    Some((cb.bottom() - bbox.y + cfg.hint_buffer_px).ceil() as i64);
            }
            hint.target_eid = Some(el.eid().to_string());
            defects.push(Defect {
                kind: DefectKind::ContentOverflow,
                severity: overflow_x + overflow_y,
                details: DefectDetails::ContentOverflow {
                    overflow_x_px: overflow_x,
                    overflow_y_px: overflow_y,
                },
                eid: Some(el.eid().to_string()),
                owner_eid: None,
                other_eid: None,
                hint: Some(hint),
            });
        }

        if el.kind().is_text() && cb.h > 0.0 && bbox.h > cb.h * cfg.underflow_ratio {
            let mut hint = Hint::new(HintAction::ShrinkContainer);
            hint.suggested_h = Some((cb.h + cfg.hint_buffer_px).ceil() as i64);
            hint.target_eid = Some(el.eid().to_string());
            defects.push(Defect {
                kind: DefectKind::ContentUnderflow,
                severity: round_px((bbox.h - cb.h).max(0.0)),
                details: DefectDetails::ContentUnderflow {
                    box_h_px: round_px(bbox.h),
                    content_h_px: round_px(cb.h),
                },
                eid: Some(el.eid().to_string()),
                owner_eid: None,
                other_eid: None,
                hint: Some(hint),
            });
        }
    }
    defects
}
