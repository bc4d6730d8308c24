//! Clamp kernel primitives for single-precision sample streams
//!
//! This crate provides one logical operation — clamp every element of an
//! `f32` buffer into `[min, max]` — through several interchangeable
//! strategies: a portable scalar reference and SIMD backends that process
//! 4 or 8 lanes per iteration.
//!
//! # Architecture
//!
//! - Single unified [`ClampPrimitives`] trait for all entry points
//! - Concrete backend types: [`ScalarBackend`], [`Sse41Backend`], [`Avx2Backend`]
//! - Compile-time backend selection via feature flags, runtime CPU validation
//!   at construction
//! - Zero-cost abstractions - no heap allocation or dynamic dispatch
//!
//! Every backend produces bit-identical output for the same inputs,
//! including NaN passthrough; throughput and the alignment precondition of
//! the `_aligned` entry points are the only observable differences.
//! Selecting which backend to use for a given CPU is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use lanekit_core::{ClampPrimitives, ScalarBackend};
//!
//! let input = [-2.0f32, -1.0, 1.0, 2.0];
//! let mut out = [0.0f32; 4];
//! ScalarBackend::new().clamp(&input, &mut out, -1.5, 1.5);
//! assert_eq!(out, [-1.5, -1.0, 1.0, 1.5]);
//! ```

pub mod error;
pub mod primitives;

// Re-export core types
pub use error::{Error, Result};

pub use primitives::{scalar_backend, Avx2Backend, ClampPrimitives, ScalarBackend, Sse41Backend};

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use primitives::avx2_backend;

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
pub use primitives::sse41_backend;
