//! Engine error types.
//!
//! Grid access never fails (out-of-range coordinates clamp silently), so
//! these errors only come from building an engine out of a configuration.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while configuring an engine.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum EngineErrorKind {
    /// Grid size was not positive or above the maximum.
    #[display("grid size must be between 1 and 4096, got {_0}")]
    InvalidSize(i32),
    /// Tick interval was negative, NaN or infinite.
    #[display("tick interval must be a finite, non-negative number of seconds, got {_0}")]
    InvalidInterval(f64),
    /// Unknown preset identifier.
    #[display("unknown preset {_0}")]
    UnknownPreset(u8),
    /// Config file could not be read.
    #[display("failed to read config: {_0}")]
    Io(String),
    /// Config text was not valid TOML for an engine config.
    #[display("failed to parse config: {_0}")]
    Parse(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What failed.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for EngineError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(EngineErrorKind::Io(err.to_string()))
    }
}

impl From<toml::de::Error> for EngineError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(EngineErrorKind::Parse(err.to_string()))
    }
}
