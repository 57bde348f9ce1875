//! Periodic angle arithmetic.
//!
//! Arc segments keep their start angle in `(-π, π]` and unwind every other
//! angle by whole turns so that it sits on the travel side of a bound:
//! - counter-clockwise: `angle >= floor`
//! - clockwise: `angle <= ceiling`
use std::f64::consts::{PI, TAU};

use super::{Point2, Vector2};

/// Reduces `angle` by whole turns into `(-π, π]`.
///
/// `-π` maps to `π`. Non-finite input yields NaN.
#[must_use]
pub fn symmetric_remainder(angle: f64) -> f64 {
    // `%` is exact for floats, so only the final shift can round.
    let r = angle % TAU;
    if r > PI {
        r - TAU
    } else if r <= -PI {
        r + TAU
    } else {
        r
    }
}

/// Returns the smallest `angle + k·2π` (`k >= 0`) that is `>= floor`.
///
/// Angles already at or above `floor` come back untouched, however far
/// above they are.
#[must_use]
pub fn unwind_ccw(angle: f64, floor: f64) -> f64 {
    if angle >= floor {
        return angle;
    }
    let turns = ((floor - angle) / TAU).ceil();
    let mut out = angle + turns * TAU;
    if out < floor {
        out += TAU;
    } else if turns > 1.0 && out - TAU >= floor {
        out -= TAU;
    }
    out
}

/// Returns the largest `angle - k·2π` (`k >= 0`) that is `<= ceiling`.
///
/// Mirror of [`unwind_ccw`].
#[must_use]
pub fn unwind_cw(angle: f64, ceiling: f64) -> f64 {
    if angle <= ceiling {
        return angle;
    }
    let turns = ((angle - ceiling) / TAU).ceil();
    let mut out = angle - turns * TAU;
    if out > ceiling {
        out -= TAU;
    } else if turns > 1.0 && out + TAU <= ceiling {
        out += TAU;
    }
    out
}

/// Unwinds `angle` onto the travel side of `bound` for the given direction.
#[must_use]
pub fn unwind(angle: f64, bound: f64, ccw: bool) -> f64 {
    if ccw {
        unwind_ccw(angle, bound)
    } else {
        unwind_cw(angle, bound)
    }
}

/// Polar angle of `point` seen from `center`, in `[-π, π]`.
#[must_use]
pub fn polar_angle(center: &Point2, point: &Point2) -> f64 {
    let d = point - center;
    d.y.atan2(d.x)
}

/// Unit vector pointing at `angle`.
#[must_use]
pub fn unit_vector(angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(cos, sin)
}
