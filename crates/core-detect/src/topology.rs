//! Title-below-body topology check.
//!
//! A slide reads top-down: every title's vertical center must sit at or above
//! the vertical center of every body element (`text`, `bullets`). A title
//! whose center falls strictly below a body center is a topology defect, the
//! strongest defect the engine reports — the fixed severity dominates any
//! pixel-denominated one so planners always address structure first.

use core_geometry::round_px;
use core_schema::{
    Defect, DefectDetails, DefectKind, ElementType, Hint, HintAction, SlideView,
};
use core_config::EngineConfig;
use tracing::debug;

/// One defect per (title, body) pair whose centers are inverted.
pub fn detect_layout_topology(view: &SlideView<'_>, cfg: &EngineConfig) -> Vec<Defect> {
    let mut defects = Vec::new();
    for title in view.elements.iter().filter(|el| el.kind() == ElementType::Title) {
        for body in view.elements.iter().filter(|el| el.kind().is_body()) {
            let title_cy = title.bbox().center_y();
            let body_cy = body.bbox().center_y();
            if title_cy <= body_cy {
                continue;
            }
            debug!(
                target: "detect.topology",
                title = title.eid(),
                body = body.eid(),
                title_cy,
                body_cy,
                "title_below_body"
            );
            let suggested_y =
                (body.bbox().y - title.bbox().h - view.safe_padding).max(0.0);
            let mut hint = Hint::new(HintAction::MoveToTop);
            hint.suggested_y = Some(round_px(suggested_y));
            hint.target_eid = Some(title.eid().to_string());
            defects.push(Defect {
                kind: DefectKind::LayoutTopology,
                severity: cfg.topology_severity,
                details: DefectDetails::Topology {
                    title_cy: round_px(title_cy),
                    body_cy: round_px(body_cy),
                },
                eid: None,
                owner_eid: Some(title.eid().to_string()),
                other_eid: Some(body.eid().to_string()),
                hint: Some(hint),
            });
        }
    }
    defects
}
