//! Axis-aligned rectangle primitives for slide-local pixel space.
//!
//! Every measured box in the pipeline (element bounding boxes, safe boxes,
//! text content boxes) is a `Rect` in slide-local pixels: origin at the slide's
//! top-left corner, positive y downward, non-negative width and height.
//!
//! Invariants:
//! - All functions here are total over finite numeric inputs; none allocate.
//! - `intersection_area` is zero (never negative) for disjoint or touching rects.
//! - `inflate` with a negative padding deflates; callers guard degenerate sizes.
//!
//! Rounding policy: diagnostics carry integer pixel fields. `round_px` is the
//! single conversion point (half-away-from-zero, matching `f64::round`) so the
//! same value never rounds two different ways in two crates.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in slide-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (`x + w`).
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`).
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Vertical center.
    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// True when the rect covers no pixels on at least one axis.
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// Signed overlap of the intervals `[a_min, a_max]` and `[b_min, b_max]`.
///
/// Positive when the intervals share length, zero when they touch, negative
/// when separated (the magnitude is the gap between them).
pub fn interval_overlap(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> f64 {
    a_max.min(b_max) - a_min.max(b_min)
}

/// Signed x-axis overlap of two rects. See [`interval_overlap`].
pub fn x_overlap(a: &Rect, b: &Rect) -> f64 {
    interval_overlap(a.x, a.right(), b.x, b.right())
}

/// Signed y-axis overlap of two rects. See [`interval_overlap`].
pub fn y_overlap(a: &Rect, b: &Rect) -> f64 {
    interval_overlap(a.y, a.bottom(), b.y, b.bottom())
}

/// Area of the axis-aligned intersection of `a` and `b`; zero when disjoint.
pub fn intersection_area(a: &Rect, b: &Rect) -> f64 {
    let ox = x_overlap(a, b);
    let oy = y_overlap(a, b);
    if ox <= 0.0 || oy <= 0.0 {
        return 0.0;
    }
    ox * oy
}

/// Grow `r` by `p` pixels on every side (shrink when `p` is negative).
pub fn inflate(r: &Rect, p: f64) -> Rect {
    Rect {
        x: r.x - p,
        y: r.y - p,
        w: r.w + 2.0 * p,
        h: r.h + 2.0 * p,
    }
}

/// Round a pixel measure to an integer, half away from zero.
pub fn round_px(v: f64) -> i64 {
    v.round() as i64
}
