//! Safe-box containment within the slide.
//!
//! An element whose safe box extends past a slide edge by more than
//! `OOB_EPS_PX` is out of bounds on that edge; overshoot at or below the
//! epsilon is measurement noise. One defect per violating edge, checked in
//! the order left, right, top, bottom. The hint is the single-axis position
//! that puts the raw bbox flush with the slide interior on that edge.

use core_geometry::round_px;
use core_schema::{Defect, DefectDetails, DefectKind, Edge, Hint, HintAction, SlideView};
use core_config::EngineConfig;

pub fn detect_out_of_bounds(view: &SlideView<'_>, cfg: &EngineConfig) -> Vec<Defect> {
    let mut defects = Vec::new();
    for el in &view.elements {
        let safe = el.safe_box;
        let bbox = el.bbox();
        let slide = view.slide;

        // (edge, overshoot, hint action, suggested x, suggested y)
        let edges = [
            (Edge::Left, -safe.x, HintAction::MoveRight, Some(0.0), None),
            (
                Edge::Right,
                safe.right() - slide.w,
                HintAction::MoveLeft,
                Some(slide.w - bbox.w),
                None,
            ),
            (Edge::Top, -safe.y, HintAction::MoveDown, None, Some(0.0)),
            (
                Edge::Bottom,
                safe.bottom() - slide.h,
                HintAction::MoveUp,
                None,
                Some(slide.h - bbox.h),
            ),
        ];

        for (edge, overshoot, action, sx, sy) in edges {
            if overshoot <= cfg.oob_eps_px {
                continue;
            }
            let mut hint = Hint::new(action);
            hint.suggested_x = sx.map(round_px);
            hint.suggested_y = sy.map(round_px);
            hint.target_eid = Some(el.eid().to_string());
            defects.push(Defect {
                kind: DefectKind::OutOfBounds,
                severity: round_px(overshoot),
                details: DefectDetails::OutOfBounds {
                    edge,
                    by_px: round_px(overshoot),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{docs, dom_el, ir_el};
    use core_schema::{ElementType, SlideView};

    #[test]
    fn interior_element_is_clean() {
        let (dom, ir) = docs(vec![(
            dom_el("a", 100.0, 100.0, 400.0, 200.0),
            ir_el("a", ElementType::Text, 60),
        )]);
        let view = SlideView::join(&dom, &ir);
        assert!(detect_out_of_bounds(&view, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn right_overshoot_fires_with_flush_hint() {
        let (dom, ir) = docs(vec![(
            dom_el("a", 1200.0, 50.0, 200.0, 100.0),
            ir_el("a", ElementType::Image, 60),
        )]);
        let view = SlideView::join(&dom, &ir);
        let defects = detect_out_of_bounds(&view, &EngineConfig::default());
        assert_eq!(defects.len(), 1);
        let d = &defects[0];
        // safeBox right = 1200 + 200 + 8 = 1408; overshoot = 128.
        assert_eq!(
            d.details,
            DefectDetails::OutOfBounds {
                edge: Edge::Right,
                by_px: 128
            }
        );
        assert_eq!(d.severity, 128);
        let hint = d.hint.as_ref().unwrap();
        assert_eq!(hint.action, HintAction::MoveLeft);
        assert_eq!(hint.suggested_x, Some(1080)); // 1280 − 200
        assert_eq!(hint.suggested_y, None);
    }

    #[test]
    fn overshoot_at_epsilon_does_not_fire() {
        // safeBox left = −(eps): x = −eps + pad → bbox.x = 7 gives safe.x = −1.
        let (dom, ir) = docs(vec![(
            dom_el("a", 7.0, 100.0, 200.0, 100.0),
            ir_el("a", ElementType::Text, 60),
        )]);
        let view = SlideView::join(&dom, &ir);
        assert!(detect_out_of_bounds(&view, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn overshoot_just_past_epsilon_fires() {
        let (dom, ir) = docs(vec![(
            dom_el("a", 6.0, 100.0, 200.0, 100.0),
            ir_el("a", ElementType::Text, 60),
        )]);
        let view = SlideView::join(&dom, &ir);
        let defects = detect_out_of_bounds(&view, &EngineConfig::default());
        assert_eq!(defects.len(), 1);
        assert_eq!(
            defects[0].details,
            DefectDetails::OutOfBounds {
                edge: Edge::Left,
                by_px: 2
            }
        );
        assert_eq!(defects[0].hint.as_ref().unwrap().suggested_x, Some(0));
    }

    #[test]
    fn corner_element_reports_each_violated_edge() {
        let (dom, ir) = docs(vec![(
            dom_el("a", -20.0, -30.0, 200.0, 100.0),
            ir_el("a", ElementType::Image, 60),
        )]);
        let view = SlideView::join(&dom, &ir);
        let defects = detect_out_of_bounds(&view, &EngineConfig::default());
        assert_eq!(defects.len(), 2);
        assert_eq!(
            defects[0].details,
            DefectDetails::OutOfBounds {
                edge: Edge::Left,
                by_px: 28
            }
        );
        assert_eq!(
            defects[1].details,
            DefectDetails::OutOfBounds {
                edge: Edge::Top,
                by_px: 38
            }
        );
        assert_eq!(defects[1].hint.as_ref().unwrap().action, HintAction::MoveDown);
        assert_eq!(defects[1].hint.as_ref().unwrap().suggested_y, Some(0));
    }

    #[test]
    fn bottom_overshoot_suggests_move_up() {
        let (dom, ir) = docs(vec![(
            dom_el("a", 100.0, 650.0, 200.0, 100.0),
            ir_el("a", ElementType::Text, 60),
        )]);
        let view = SlideView::join(&dom, &ir);
        let defects = detect_out_of_bounds(&view, &EngineConfig::default());
        assert_eq!(defects.len(), 1);
        // safe bottom = 650 + 100 + 8 = 758; overshoot 38.
        assert_eq!(defects[0].severity, 38);
        let hint = defects[0].hint.as_ref().unwrap();
        assert_eq!(hint.action, HintAction::MoveUp);
        assert_eq!(hint.suggested_y, Some(620)); // 720 − 100
    }
}
