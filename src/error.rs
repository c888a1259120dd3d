//! Error types shared by the data and rendering layers.

use std::fmt;
use thiserror::Error;

/// Reasons a pair of coordinate sequences cannot form a series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputMismatch {
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("series is empty")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Input mismatch: {0}")]
    InputMismatch(#[from] InputMismatch),
    #[error("Render backend unavailable: {0}")]
    RenderBackendUnavailable(String),
}

impl ChartError {
    /// Wrap a backend failure, keeping only its message.
    pub fn backend(err: impl fmt::Display) -> Self {
        ChartError::RenderBackendUnavailable(err.to_string())
    }
}
