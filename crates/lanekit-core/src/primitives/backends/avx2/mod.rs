//! AVX2 backend implementation
//!
//! Processes 8 lanes per main-loop iteration. Aligned and unaligned access
//! share one kernel; the access mode only selects the load/store
//! instruction.

use crate::error::{Error, Result};
use crate::primitives::ClampPrimitives;

/// AVX2 backend for x86_64 processors, 8 lanes wide
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend;

impl Avx2Backend {
    /// Create a new AVX2 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support AVX2 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            if !is_x86_feature_detected!("avx2") {
                panic!("AVX2 backend requested but CPU doesn't support AVX2 instructions");
            }
            Self
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            panic!("AVX2 backend not available: not compiled with AVX2 support");
        }
    }

    /// Create a new AVX2 backend, reporting unavailability instead of
    /// panicking
    pub fn try_new() -> Result<Self> {
        if Self::is_available() {
            Ok(Self)
        } else {
            log::debug!("avx2 backend requested but not compiled in or not supported by this CPU");
            Err(Error::FeatureNotAvailable("avx2".to_string()))
        }
    }

    /// Check if AVX2 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod kernel {
    use crate::primitives::backends::scalar;
    use std::arch::x86_64::*;

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load(src: *const f32, aligned: bool) -> __m256 {
        if aligned {
            _mm256_load_ps(src)
        } else {
            _mm256_loadu_ps(src)
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn store(dst: *mut f32, v: __m256, aligned: bool) {
        if aligned {
            _mm256_store_ps(dst, v);
        } else {
            _mm256_storeu_ps(dst, v);
        }
    }

    /// Clamp one 8-lane vector.
    ///
    /// Both masks are derived from the original loaded vector, and the `max`
    /// replacement is applied before the `min` replacement - the lane-parallel
    /// translation of the scalar ternary. The compares are ordered, so NaN
    /// lanes select neither bound and pass through unchanged.
    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn clamp_lanes(v: __m256, vmin: __m256, vmax: __m256) -> __m256 {
        let exceeds_max = _mm256_cmp_ps(vmax, v, _CMP_LT_OS);
        let below_min = _mm256_cmp_ps(v, vmin, _CMP_LT_OS);
        let v = _mm256_blendv_ps(v, vmax, exceeds_max);
        _mm256_blendv_ps(v, vmin, below_min)
    }

    /// AVX2 clamp kernel.
    ///
    /// # Safety
    /// Caller must have verified AVX2 support, and when `aligned` is true
    /// both buffers must start on a 32-byte boundary.
    #[target_feature(enable = "avx2")]
    pub unsafe fn clamp_f32(input: &[f32], out: &mut [f32], min: f32, max: f32, aligned: bool) {
        let n = input.len().min(out.len());
        let chunks = n / 8;
        let vmin = _mm256_set1_ps(min);
        let vmax = _mm256_set1_ps(max);

        for i in 0..chunks {
            let src = input.as_ptr().add(i * 8);
            let dst = out.as_mut_ptr().add(i * 8);
            let v = clamp_lanes(load(src, aligned), vmin, vmax);
            store(dst, v, aligned);
        }

        // Remainder reuses the scalar reference loop itself
        let done = chunks * 8;
        scalar::clamp_slice(&input[done..n], &mut out[done..n], min, max);
    }

    /// In-place AVX2 clamp kernel (`out == input`)
    ///
    /// # Safety
    /// Caller must have verified AVX2 support.
    #[target_feature(enable = "avx2")]
    pub unsafe fn clamp_f32_in_place(data: &mut [f32], min: f32, max: f32) {
        let chunks = data.len() / 8;
        let vmin = _mm256_set1_ps(min);
        let vmax = _mm256_set1_ps(max);

        for i in 0..chunks {
            let ptr = data.as_mut_ptr().add(i * 8);
            let v = clamp_lanes(_mm256_loadu_ps(ptr), vmin, vmax);
            _mm256_storeu_ps(ptr, v);
        }

        scalar::clamp_slice_in_place(&mut data[chunks * 8..], min, max);
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl ClampPrimitives for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2"
    }

    fn simd_width(&self) -> usize {
        8
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
        debug_assert!(input.is_empty() || is_aligned(input.as_ptr(), 32));
        debug_assert!(out.is_empty() || is_aligned(out.as_ptr(), 32));
        // Safety: CPU support was checked in new()/try_new(); the 32-byte
        // alignment precondition is the caller's contract
        unsafe { kernel::clamp_f32(input, out, min, max, true) }
    }

    fn clamp_in_place(&self, data: &mut [f32], min: f32, max: f32) {
        // Safety: CPU support was checked in new()/try_new()
        unsafe { kernel::clamp_f32_in_place(data, min, max) }
    }
}

// Fallback for non-AVX2 builds - trait defaults give scalar behavior
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl ClampPrimitives for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }
}
