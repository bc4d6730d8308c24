//! Concrete backend implementations
//!
//! This module provides the strategy types behind `ClampPrimitives`.
//! No Box, no dyn, just simple types with compile-time dispatch; SIMD
//! backends are compiled in by feature flag and validate CPU support when
//! constructed.

pub mod avx2;
pub mod scalar;
pub mod sse41;

// Re-export the main backend types
pub use avx2::Avx2Backend;
pub use scalar::ScalarBackend;
pub use sse41::Sse41Backend;
