//! Error types for every pipeline stage
//!
//! All failures are local validation failures. Nothing here is retryable.

use thiserror::Error;

/// Malformed mixed encoding or an invalid paired-index configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("mixed vector has {got} values, expected {expected}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("paired index {index} is outside [0, {limit})")]
    IndexOutOfRange { index: usize, limit: usize },
    #[error("paired index {index} is listed more than once")]
    DuplicateIndex { index: usize },
}

/// Wrong-sized angle vector handed to the kinematics model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("angle vector has {got} values, expected {expected}")]
pub struct DimensionError {
    pub expected: usize,
    pub got: usize,
}

/// Bounding sphere requested over zero points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot fit a bounding sphere to zero points")]
pub struct EmptyInputError;

/// Glove closure channel outside its [0, 1] domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GloveError {
    #[error("glove vector has {got} channels, expected 4")]
    ChannelCount { got: usize },
    #[error("glove channel {channel} is not finite")]
    NonFinite { channel: &'static str },
    #[error("glove channel {channel}={value} is outside [0, 1]")]
    OutOfRange { channel: &'static str, value: f32 },
}

/// Invalid [`HandConfig`](crate::config::HandConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    FixedIndices(#[from] DecodeError),
    #[error("{finger} calibration reads joint {joint}, only {limit} angles exist")]
    CalibrationJoint {
        finger: &'static str,
        joint: usize,
        limit: usize,
    },
    #[error("{finger} calibration has a non-finite coefficient")]
    CalibrationNonFinite { finger: &'static str },
}

/// First failure raised by any pipeline stage
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
    #[error(transparent)]
    Glove(#[from] GloveError),
    #[error("pose model failed: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
