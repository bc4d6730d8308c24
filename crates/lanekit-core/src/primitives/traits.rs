//! Unified clamp primitives trait
//!
//! Every backend implements the same entry points with identical numeric
//! semantics; the trait's default methods are the scalar reference.

use crate::error::{Error, Result};
use crate::primitives::backends::scalar;

/// Whether `ptr` starts on an `align`-byte boundary
#[inline]
pub(crate) fn is_aligned(ptr: *const f32, align: usize) -> bool {
    ptr as usize % align == 0
}

/// Unified trait for the clamp kernel's strategy backends
///
/// The default implementations define the authoritative scalar semantics:
///
/// `out[i] = if input[i] > max { max } else if input[i] < min { min } else { input[i] }`
///
/// The `> max` test is evaluated first. Both comparisons are IEEE ordered,
/// so a NaN input fails both and is copied through unchanged. `min > max` is
/// a caller error: the result is whichever branch fires first, it is not
/// validated, and SIMD backends may then legitimately differ from the scalar
/// result. For `min <= max` every backend is bit-identical for all inputs,
/// NaN included.
pub trait ClampPrimitives: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of lanes processed per main-loop iteration)
    fn simd_width(&self) -> usize {
        1
    }

    /// Required buffer alignment in bytes for the `_aligned` entry points
    fn alignment(&self) -> usize {
        self.simd_width() * std::mem::size_of::<f32>()
    }

    /// Clamp every element of `input` into `[min, max]`, writing to `out`.
    ///
    /// No alignment requirement. Buffers must have equal length; this is
    /// debug-checked only, the release kernel performs no validation.
    fn clamp(&self, input: &[f32], out: &mut [f32], min: f32, max: f32) {
        debug_assert_eq!(
            input.len(),
            out.len(),
            "input and output must have the same length"
        );
        scalar::clamp_slice(input, out, min, max);
    }

    /// Like [`clamp`](Self::clamp), but both buffers must start on an
    /// [`alignment`](Self::alignment)-byte boundary.
    ///
    /// Violating the alignment precondition is undefined behavior for SIMD
    /// backends (it may fault or silently corrupt); it is debug-checked
    /// only. Use [`try_clamp_aligned`](Self::try_clamp_aligned) for a
    /// validated boundary.
    fn clamp_aligned(&self, input: &[f32], out: &mut [f32], min: f32, max: f32) {
        debug_assert!(input.is_empty() || is_aligned(input.as_ptr(), self.alignment()));
        debug_assert!(out.is_empty() || is_aligned(out.as_ptr(), self.alignment()));
        self.clamp(input, out, min, max);
    }

    /// Clamp `data` in place.
    ///
    /// This is the aliasing-supported form of [`clamp`](Self::clamp): each
    /// lane depends only on its own input lane, so the result is
    /// bit-identical to the out-of-place call.
    fn clamp_in_place(&self, data: &mut [f32], min: f32, max: f32) {
        scalar::clamp_slice_in_place(data, min, max);
    }

    /// Validated wrapper around [`clamp`](Self::clamp)
    fn try_clamp(&self, input: &[f32], out: &mut [f32], min: f32, max: f32) -> Result<()> {
        if input.len() != out.len() {
            return Err(Error::LengthMismatch {
                input: input.len(),
                output: out.len(),
            });
        }
        self.clamp(input, out, min, max);
        Ok(())
    }

    /// Validated wrapper around [`clamp_aligned`](Self::clamp_aligned)
    ///
    /// Empty buffers are always accepted; the kernel never dereferences
    /// them.
    fn try_clamp_aligned(&self, input: &[f32], out: &mut [f32], min: f32, max: f32) -> Result<()> {
        if input.len() != out.len() {
            return Err(Error::LengthMismatch {
                input: input.len(),
                output: out.len(),
            });
        }
        let align = self.alignment();
        if !input.is_empty()
            && (!is_aligned(input.as_ptr(), align) || !is_aligned(out.as_ptr(), align))
        {
            return Err(Error::Misaligned { required: align });
        }
        self.clamp_aligned(input, out, min, max);
        Ok(())
    }
}
