//! Directional separation options for one overlapping pair.
//!
//! All four cardinal directions are always produced, cheapest first. Targets
//! place the owner's safe box flush against the other's safe box (the safe
//! padding between raw boxes is preserved by construction). Costs are the
//! absolute distance of the move, clamped to ≥ 0 — a direction whose target
//! lies behind the owner's current position costs nothing extra to state, and
//! the planner discards it by cost ordering anyway.
//!
//! Targets may land outside the slide; feasibility against slide bounds and
//! third elements is the conflict graph's envelope data, not this function's
//! concern.

use core_geometry::round_px;
use core_schema::{ElementView, SeparationDirection, SeparationOption};

/// The four directional moves that would clear the overlap between `owner`
/// and `other`, sorted stable-ascending by `cost_px`.
pub fn separation_options(
    owner: &ElementView<'_>,
    other: &ElementView<'_>,
    safe_padding: f64,
) -> Vec<SeparationOption> {
    let bbox = owner.bbox();
    let own_safe = owner.safe_box;
    let oth_safe = other.safe_box;

    // Offset between the owner's safe box and raw box on each axis; moving
    // the raw box to `target` puts the safe box exactly at the computed edge.
    let dx = own_safe.x - bbox.x;
    let dy = own_safe.y - bbox.y;

    let up_y = oth_safe.y - bbox.h - safe_padding;
    let down_y = oth_safe.bottom() + safe_padding - dy;
    let left_x = oth_safe.x - bbox.w - safe_padding;
    let right_x = oth_safe.right() + safe_padding - dx;

    let mut options = vec![
        SeparationOption {
            direction: SeparationDirection::MoveUp,
            target_x: None,
            target_y: Some(round_px(up_y)),
            cost_px: round_px((bbox.y - up_y).max(0.0)),
        },
        SeparationOption {
            direction: SeparationDirection::MoveDown,
            target_x: None,
            target_y: Some(round_px(down_y)),
            cost_px: round_px((down_y - bbox.y).max(0.0)),
        },
        SeparationOption {
            direction: SeparationDirection::MoveLeft,
            target_x: Some(round_px(left_x)),
            target_y: None,
            cost_px: round_px((bbox.x - left_x).max(0.0)),
        },
        SeparationOption {
            direction: SeparationDirection::MoveRight,
            target_x: Some(round_px(right_x)),
            target_y: None,
            cost_px: round_px((right_x - bbox.x).max(0.0)),
        },
    ];
    options.sort_by_key(|o| o.cost_px);
    options
}
