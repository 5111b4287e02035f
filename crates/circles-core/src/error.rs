//! Error types for circles-core.
//!
//! Only setup is fallible. Once a [`RecordLayout`](crate::RecordLayout) is
//! built and a loop is armed, the per-frame path trusts its collaborators.

use thiserror::Error;

/// Errors raised while building a record layout or loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Stride of zero elements.
    #[error("stride length must be greater than zero")]
    ZeroStride,

    /// Stride too short to hold the six circle fields.
    #[error("stride length {stride} is shorter than a circle record ({fields} fields)")]
    StrideTooShort { stride: usize, fields: usize },

    /// Data length is not a whole number of records.
    #[error("data length {data_length} is not a multiple of stride length {stride}")]
    MisalignedLength { data_length: usize, stride: usize },

    /// Configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),
}

/// Errors raised by the animation loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoopError {
    /// The host refused to arm a next-frame callback.
    #[error("failed to schedule next frame: {0}")]
    Schedule(String),

    /// A frame callback is already pending.
    #[error("animation loop already has a pending frame")]
    AlreadyRunning,
}
