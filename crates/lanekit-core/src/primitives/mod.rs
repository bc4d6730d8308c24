//! Clamp primitives with compile-time dispatch
//!
//! This module provides the clamp kernel in several interchangeable
//! strategies with identical numeric semantics.
//!
//! # Architecture
//!
//! - Single unified `ClampPrimitives` trait for all entry points
//! - Concrete backend types: `ScalarBackend`, `Sse41Backend`, `Avx2Backend`
//! - Compile-time backend compilation with runtime CPU validation
//! - Zero-cost abstractions - no heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust,ignore
//! // Explicit backend selection - panics if not supported
//! let backend = Avx2Backend::new();
//! backend.clamp(&input, &mut out, -1.0, 1.0);
//!
//! // Checked construction for callers that want to fall back themselves
//! let backend = Avx2Backend::try_new()?;
//! ```

pub mod backends;
pub mod traits;

pub use backends::{Avx2Backend, ScalarBackend, Sse41Backend};
pub use traits::ClampPrimitives;

// Convenience functions for backend creation
/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create an SSE4.1 backend (panics if not supported)
#[cfg(all(target_arch = "x86_64", feature = "sse"))]
pub fn sse41_backend() -> Sse41Backend {
    Sse41Backend::new()
}

/// Create an AVX2 backend (panics if not supported)
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub fn avx2_backend() -> Avx2Backend {
    Avx2Backend::new()
}
