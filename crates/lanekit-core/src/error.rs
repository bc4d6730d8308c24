//! Error types for lanekit kernels
//!
//! The kernels themselves never fail; these errors are reported only by the
//! validated boundary (`try_new`, `try_clamp*`) that sits in front of them.

use thiserror::Error;

/// Error type for kernel boundary validation
#[derive(Error, Debug)]
pub enum Error {
    /// Requested backend is not compiled in or not supported by this CPU
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),

    /// Input and output buffers have different lengths
    #[error("Buffer length mismatch: input has {input} samples, output has {output}")]
    LengthMismatch { input: usize, output: usize },

    /// Buffer does not satisfy an aligned entry point's precondition
    #[error("Buffer not aligned to a {required}-byte boundary")]
    Misaligned { required: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
