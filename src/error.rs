//! src/error.rs
//!
//! Error type shared by the sparkline core, the render layer, and sample sources.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SparkError {
    #[error("max_length must be at least 1")]
    InvalidMaxLength,

    #[error("value range must be finite, got [{min_y}, {max_y}]")]
    InvalidRange { min_y: f64, max_y: f64 },

    #[error("unknown container: {0}")]
    UnknownContainer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("replay error: {0}")]
    Replay(String),
}

pub type Result<T> = std::result::Result<T, SparkError>;
