//! SSE4.1 backend implementation
//!
//! Processes 4 lanes per main-loop iteration. SSE4.1 is the floor because
//! the lane select uses `blendvps`.

use crate::error::{Error, Result};
use crate::primitives::ClampPrimitives;

/// SSE4.1 backend for x86_64 processors, 4 lanes wide
#[derive(Clone, Copy, Debug)]
pub struct Sse41Backend;

impl Sse41Backend {
    /// Create a new SSE4.1 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support SSE4.1 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "sse"))]
        {
            if !is_x86_feature_detected!("sse4.1") {
                panic!("SSE4.1 backend requested but CPU doesn't support SSE4.1 instructions");
            }
            Self
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "sse")))]
        {
            panic!("SSE4.1 backend not available: not compiled with SSE support");
        }
    }

    /// Create a new SSE4.1 backend, reporting unavailability instead of
    /// panicking
    pub fn try_new() -> Result<Self> {
        if Self::is_available() {
            Ok(Self)
        } else {
            log::debug!(
                "sse4.1 backend requested but not compiled in or not supported by this CPU"
            );
            Err(Error::FeatureNotAvailable("sse4.1".to_string()))
        }
    }

    /// Check if SSE4.1 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "sse"))]
        {
            is_x86_feature_detected!("sse4.1")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "sse")))]
        {
            false
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
mod kernel {
    use crate::primitives::backends::scalar;
    use std::arch::x86_64::*;

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn load(src: *const f32, aligned: bool) -> __m128 {
        if aligned {
            _mm_load_ps(src)
        } else {
            _mm_loadu_ps(src)
        }
    }

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn store(dst: *mut f32, v: __m128, aligned: bool) {
        if aligned {
            _mm_store_ps(dst, v);
        } else {
            _mm_storeu_ps(dst, v);
        }
    }

    /// Clamp one 4-lane vector.
    ///
    /// Both masks come from the original loaded vector; `max` replacement is
    /// applied first, then `min`. `cmplt` is an ordered compare, so NaN
    /// lanes select neither bound and pass through unchanged.
    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn clamp_lanes(v: __m128, vmin: __m128, vmax: __m128) -> __m128 {
        let exceeds_max = _mm_cmplt_ps(vmax, v);
        let below_min = _mm_cmplt_ps(v, vmin);
        let v = _mm_blendv_ps(v, vmax, exceeds_max);
        _mm_blendv_ps(v, vmin, below_min)
    }

    /// SSE4.1 clamp kernel.
    ///
    /// # Safety
    /// Caller must have verified SSE4.1 support, and when `aligned` is true
    /// both buffers must start on a 16-byte boundary.
    #[target_feature(enable = "sse4.1")]
    pub unsafe fn clamp_f32(input: &[f32], out: &mut [f32], min: f32, max: f32, aligned: bool) {
        let n = input.len().min(out.len());
        let chunks = n / 4;
        let vmin = _mm_set1_ps(min);
        let vmax = _mm_set1_ps(max);

        for i in 0..chunks {
            let src = input.as_ptr().add(i * 4);
            let dst = out.as_mut_ptr().add(i * 4);
            let v = clamp_lanes(load(src, aligned), vmin, vmax);
            store(dst, v, aligned);
        }

        // Remainder reuses the scalar reference loop itself
        let done = chunks * 4;
        scalar::clamp_slice(&input[done..n], &mut out[done..n], min, max);
    }

    /// In-place SSE4.1 clamp kernel (`out == input`)
    ///
    /// # Safety
    /// Caller must have verified SSE4.1 support.
    #[target_feature(enable = "sse4.1")]
    pub unsafe fn clamp_f32_in_place(data: &mut [f32], min: f32, max: f32) {
        let chunks = data.len() / 4;
        let vmin = _mm_set1_ps(min);
        let vmax = _mm_set1_ps(max);

        for i in 0..chunks {
            let ptr = data.as_mut_ptr().add(i * 4);
            let v = clamp_lanes(_mm_loadu_ps(ptr), vmin, vmax);
            _mm_storeu_ps(ptr, v);
        }

        scalar::clamp_slice_in_place(&mut data[chunks * 4..], min, max);
    }
}

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
impl ClampPrimitives for Sse41Backend {
    fn backend_name(&self) -> &'static str {
        "sse4.1"
    }

    fn simd_width(&self) -> usize {
        4
    }

    fn clamp(&self, input: &[f32], out: &mut [f32], min: f32, max: f32) {
        debug_assert_eq!(
            input.len(),
            out.len(),
            "input and output must have the same length"
        );
        // Safety: CPU support was checked in new()/try_new()
        unsafe { kernel::clamp_f32(input, out, min, max, false) }
    }

    fn clamp_aligned(&self, input: &[f32], out: &mut [f32], min: f32, max: f32) {
        use crate::primitives::traits::is_aligned;
        debug_assert_eq!(
            input.len(),
            out.len(),
            "input and output must have the same length"
        );
        debug_assert!(input.is_empty() || is_aligned(input.as_ptr(), 16));
        debug_assert!(out.is_empty() || is_aligned(out.as_ptr(), 16));
        // Safety: CPU support was checked in new()/try_new(); the 16-byte
        // alignment precondition is the caller's contract
        unsafe { kernel::clamp_f32(input, out, min, max, true) }
    }

    fn clamp_in_place(&self, data: &mut [f32], min: f32, max: f32) {
        // Safety: CPU support was checked in new()/try_new()
        unsafe { kernel::clamp_f32_in_place(data, min, max) }
    }
}

// Fallback for non-SSE builds - trait defaults give scalar behavior
#[cfg(not(all(target_arch = "x86_64", feature = "sse")))]
impl ClampPrimitives for Sse41Backend {
    fn backend_name(&self) -> &'static str {
        "sse4.1 (unavailable)"
    }
}
