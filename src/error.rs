//! Error types for the exercise tracking library.

use serde::Serialize;
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Exercise name not recognised
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    /// Malformed landmark recording
    #[error("Recording error at line {line}: {message}")]
    RecordingError {
        /// 1-based line number in the recording
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Landmark provider failed to deliver frames
    #[error("Landmark source error: {0}")]
    SourceError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single frame could not be fully analyzed.
///
/// These are data-quality outcomes, not failures: the session keeps running
/// and the next frame is judged on its own.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameRejection {
    /// Required landmarks are missing or below the visibility threshold
    #[error("required landmarks are missing or poorly visible")]
    InsufficientVisibility,

    /// Coarse gate passed but neither body side is usable
    #[error("no body side is visible enough to analyze")]
    NoUsableSide,

    /// Two landmarks of a joint coincide so the angle is undefined
    #[error("joint landmarks coincide, angle is undefined")]
    DegenerateGeometry,
}

impl FrameRejection {
    /// Whether the renderer should ask the user to step into frame
    #[must_use]
    pub fn is_out_of_frame(self) -> bool {
        matches!(self, Self::InsufficientVisibility | Self::DegenerateGeometry)
    }
}
