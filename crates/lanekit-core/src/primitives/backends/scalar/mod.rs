//! Scalar backend implementation
//!
//! This backend defines the reference clamp semantics. The free functions
//! here are also the tail loop of every SIMD backend, so boundary behavior
//! is identical regardless of vector width.

use crate::primitives::ClampPrimitives;

/// Reference clamp for one sample.
///
/// The `> max` test fires first; NaN fails both ordered comparisons and is
/// returned unchanged.
#[inline(always)]
pub(crate) fn clamp_one(x: f32, min: f32, max: f32) -> f32 {
    if x > max {
        max
    } else if x < min {
        min
    } else {
        x
    }
}

/// Reference clamp over a slice pair.
///
/// Processes `min(input.len(), out.len())` samples.
#[inline]
pub(crate) fn clamp_slice(input: &[f32], out: &mut [f32], min: f32, max: f32) {
    for (dst, &x) in out.iter_mut().zip(input.iter()) {
        *dst = clamp_one(x, min, max);
    }
}

/// Reference clamp over a single buffer (`out == input`)
#[inline]
pub(crate) fn clamp_slice_in_place(data: &mut [f32], min: f32, max: f32) {
    for x in data.iter_mut() {
        *x = clamp_one(*x, min, max);
    }
}

/// Scalar backend - always available, one sample at a time
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ClampPrimitives for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All entry points use the default implementations from the trait
}
