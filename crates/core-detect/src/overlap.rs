//! Pairwise safe-box overlap and suspected occlusion.
//!
//! Scans all unordered element pairs in DOM order (`i < j`). A pair is
//! skipped when either element is a decoration, when both share a non-empty
//! group (intentional co-location, e.g. text on a shape), or when the safe
//! boxes intersect by less than `MIN_OVERLAP_AREA_PX`.
//!
//! The *owner* of a surviving pair is the lower-priority element — the one a
//! repair targets. Ties keep the first element of the scan, so ownership is
//! a pure function of (priority, DOM order) regardless of geometry.
//!
//! Equal z-index → `overlap` defect: both elements genuinely compete for the
//! pixels. Severity is the intersection area, doubled when either side
//! carries text (clipped text is worse than a clipped picture). The hint is
//! the cheapest of the four directional separations for the owner.
//!
//! Different z-index → `occlusion_suspected` warning: stacking may be
//! intentional, so the engine reports rather than prescribes, recording
//! which element is on top.

use core_geometry::{intersection_area, round_px};
use core_schema::{
    Defect, DefectDetails, DefectKind, ElementType, ElementView, Hint, HintAction,
    SeparationDirection, SlideView, Warning, WarningDetails, WarningKind,
};
use core_config::EngineConfig;
use core_conflict::separation_options;
use tracing::debug;

pub fn detect_overlap(
    view: &SlideView<'_>,
    cfg: &EngineConfig,
) -> (Vec<Defect>, Vec<Warning>) {
    let mut defects = Vec::new();
    let mut warnings = Vec::new();

    let elements = &view.elements;
    for i in 0..elements.len() {
        for j in (i + 1)..elements.len() {
            let a = &elements[i];
            let b = &elements[j];
            if a.kind() == ElementType::Decoration || b.kind() == ElementType::Decoration {
                continue;
            }
            if a.same_group(b) {
                continue;
            }
            let area = intersection_area(&a.safe_box, &b.safe_box);
            if area < cfg.min_overlap_area_px {
                continue;
            }

            // Lower priority loses the pixels; scan order breaks ties.
            let (owner, other) = if b.priority() < a.priority() {
                (b, a)
            } else {
                (a, b)
            };

            if a.z_index() == b.z_index() {
                defects.push(overlap_defect(view, cfg, owner, other, area));
            } else {
                let top = if a.z_index() > b.z_index() { a } else { b };
                debug!(
                    target: "detect.overlap",
                    owner = owner.eid(),
                    other = other.eid(),
                    top = top.eid(),
                    "occlusion_suspected"
                );
                warnings.push(Warning {
                    kind: WarningKind::OcclusionSuspected,
                    owner_eid: owner.eid().to_string(),
                    other_eid: other.eid().to_string(),
                    details: WarningDetails {
                        overlap_area_px: round_px(area),
                        top_eid: top.eid().to_string(),
                    },
                });
            }
        }
    }
    (defects, warnings)
}

fn overlap_defect(
    view: &SlideView<'_>,
    cfg: &EngineConfig,
    owner: &ElementView<'_>,
    other: &ElementView<'_>,
    area: f64,
) -> Defect {
    let text_involved = owner.kind().is_text() || other.kind().is_text();
    let mult = if text_involved {
        cfg.text_overlap_severity_mult
    } else {
        1.0
    };
    let severity_note = text_involved.then(|| {
        format!(
            "text content involved: severity multiplied by {}",
            cfg.text_overlap_severity_mult
        )
    });

    let options = separation_options(owner, other, view.safe_padding);
    let hint = options.first().map(|cheapest| {
        let mut hint = Hint::new(match cheapest.direction {
            SeparationDirection::MoveUp => HintAction::MoveUp,
            SeparationDirection::MoveDown => HintAction::MoveDown,
            SeparationDirection::MoveLeft => HintAction::MoveLeft,
            SeparationDirection::MoveRight => HintAction::MoveRight,
        });
        hint.suggested_x = cheapest.target_x;
        hint.suggested_y = cheapest.target_y;
        hint.target_eid = Some(owner.eid().to_string());
        hint
    });

    Defect {
        kind: DefectKind::Overlap,
        severity: round_px(area * mult),
        details: DefectDetails::Overlap {
            overlap_area_px: round_px(area),
            severity_note,
        },
        eid: None,
        owner_eid: Some(owner.eid().to_string()),
        other_eid: Some(other.eid().to_string()),
        hint,
    }
}
