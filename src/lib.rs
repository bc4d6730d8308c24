//! SIMD-accelerated kernels for single-precision sample streams
//!
//! This crate re-exports the workspace crates behind one facade. The clamp
//! kernel lives in `lanekit-core`: one operation, several interchangeable
//! strategies (scalar reference, 4-wide SSE4.1, 8-wide AVX2) with
//! bit-identical output.
//!
//! # Example
//!
//! ```rust
//! use lanekit::{ClampPrimitives, ScalarBackend};
//!
//! let input = [-2.0f32, -1.0, 1.0, 2.0];
//! let mut out = [0.0f32; 4];
//! ScalarBackend::new().clamp(&input, &mut out, -1.5, 1.5);
//! assert_eq!(out, [-1.5, -1.0, 1.0, 1.5]);
//! ```

pub use lanekit_core::*;
