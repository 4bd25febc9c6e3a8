//! 2D vector helpers on top of nalgebra.
//!
//! Arithmetic (add, subtract, negate, scalar multiply/divide) is the nalgebra
//! operator set on [`NVec2`]. The helpers here name the handful of
//! operations the kernel reaches for, and give normalization an explicit
//! failure for zero-length input.

use super::states::NVec2;
use crate::error::{Result, SandboxError};

#[inline]
pub fn dot(a: &NVec2, b: &NVec2) -> f64 {
    a.dot(b)
}

#[inline]
pub fn magnitude_squared(v: &NVec2) -> f64 {
    dot(v, v)
}

/// `sqrt(dot(v, v))`
#[inline]
pub fn magnitude(v: &NVec2) -> f64 {
    magnitude_squared(v).sqrt()
}

#[inline]
pub fn scale(v: &NVec2, s: f64) -> NVec2 {
    v * s
}

#[inline]
pub fn distance_squared(a: &NVec2, b: &NVec2) -> f64 {
    magnitude_squared(&(a - b))
}

#[inline]
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    distance_squared(a, b).sqrt()
}

/// `v / |v|`, or `SandboxError::DegenerateVector` when `|v| == 0`.
pub fn try_normalize(v: &NVec2) -> Result<NVec2> {
    let m = magnitude(v);
    if m == 0.0 || !m.is_finite() {
        return Err(SandboxError::DegenerateVector);
    }
    Ok(v / m)
}
