use bevy::log::warn;
use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::utils::constants::{
    MIN_DIRECTION_LENGTH, QUATERNION_NORM_TOLERANCE, QUATERNION_ZERO_EPSILON,
};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Returns `true` if every component of the vector is finite.
#[inline]
pub fn is_finite_vector(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Normalizes `v`, falling back to `fallback` when `v` contains NaN or is
/// shorter than 1e-3.
///
/// Every direction that feeds a rotation or a force goes through here so a
/// stalled or degenerate vector can never poison the integrator.
pub fn safe_normalize(v: &Vector3<f64>, fallback: Vector3<f64>) -> Vector3<f64> {
    if v.iter().any(|c| c.is_nan()) {
        return fallback;
    }
    let length = v.norm();
    if !length.is_finite() || length < MIN_DIRECTION_LENGTH {
        return fallback;
    }
    v / length
}

/// Clamps `value` into `[lo, hi]`.
///
/// Reversed bounds are swapped (and reported) rather than panicking like
/// `f64::clamp`. A NaN value maps to the lower bound.
pub fn safe_clamp(value: f64, lo: f64, hi: f64) -> f64 {
    let (lo, hi) = if lo <= hi {
        (lo, hi)
    } else {
        warn!("safe_clamp called with reversed bounds ({}, {}). Swapping.", lo, hi);
        (hi, lo)
    };

    if value.is_nan() {
        return lo;
    }
    value.max(lo).min(hi)
}

/// Truncates a float measurement to a whole number for display.
///
/// NaN maps to 0 and out-of-range values saturate at the integer limits.
pub fn safe_truncate_to_int(value: f64) -> i64 {
    if value.is_nan() {
        0
    } else if value >= i64::MAX as f64 {
        i64::MAX
    } else if value <= i64::MIN as f64 {
        i64::MIN
    } else {
        value.trunc() as i64
    }
}

/// Guards an orientation against integration drift.
///
/// All-NaN or all-zero quaternions become the identity, quaternions whose
/// norm has drifted more than 1e-3 from one are renormalized, anything else
/// passes through unchanged.
pub fn validate_quaternion(q: &Quaternion<f64>) -> UnitQuaternion<f64> {
    let coords = q.coords;
    let all_nan = coords.iter().all(|c| c.is_nan());
    let all_zero = coords.iter().all(|c| c.abs() < QUATERNION_ZERO_EPSILON);

    if all_nan || all_zero {
        return UnitQuaternion::identity();
    }

    // A partially-NaN quaternion has no usable norm either
    if coords.iter().any(|c| !c.is_finite()) {
        warn!("Non-finite quaternion {:?} reset to identity", coords);
        return UnitQuaternion::identity();
    }

    let norm = q.norm();
    if (norm - 1.0).abs() > QUATERNION_NORM_TOLERANCE {
        UnitQuaternion::new_normalize(*q)
    } else {
        UnitQuaternion::new_unchecked(*q)
    }
}

/// Heading in degrees, measured from +Z towards +X, normalized to [0, 360).
pub fn heading_degrees(forward: &Vector3<f64>) -> f64 {
    let heading = rad_to_deg(forward.x.atan2(forward.z));
    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Bank angle in degrees from the body up vector.
pub fn roll_degrees(up: &Vector3<f64>) -> f64 {
    rad_to_deg(up.x.atan2(up.y))
}

/// Pitch angle in degrees from the body forward vector.
pub fn pitch_degrees(forward: &Vector3<f64>) -> f64 {
    rad_to_deg(safe_clamp(forward.y, -1.0, 1.0).asin())
}
