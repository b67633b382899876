//! Engine configuration and the two stock presets.
//!
//! Configs deserialize from TOML; missing keys fall back to [`EngineConfig::default`].
//!
//! ```toml
//! size = 80
//! interval_secs = 0.05
//! num_threads = 4
//! start_running = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{EngineError, EngineErrorKind};

/// Largest accepted grid side length.
pub const MAX_GRID_SIZE: i32 = 4096;

/// Check that `size` is a usable grid side length (1 ..= [`MAX_GRID_SIZE`]).
pub fn validate_size(size: i32) -> Result<(), EngineError> {
    if size <= 0 || size > MAX_GRID_SIZE {
        return Err(EngineError::new(EngineErrorKind::InvalidSize(size)));
    }
    Ok(())
}

/// Construction parameters for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length N of the N x N grid.
    pub size: i32,
    /// Minimum seconds between two generations.
    pub interval_secs: f64,
    /// Rayon threads used to compute a generation. 0 and 1 both mean serial.
    pub num_threads: u8,
    /// Whether the engine starts Running or Idle.
    pub start_running: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            size: 42,
            interval_secs: 0.1,
            num_threads: 1,
            start_running: true,
        }
    }
}

/// Stock configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 42 x 42 grid, 0.1 s per generation, starts paused.
    Classic,
    /// 80 x 80 grid, 0.05 s per generation, starts running.
    Atom,
}

impl Preset {
    /// Map a C ABI preset id (0 = classic, 1 = atom).
    pub fn from_id(id: u8) -> Result<Self, EngineError> {
        match id {
            0 => Ok(Preset::Classic),
            1 => Ok(Preset::Atom),
            _ => Err(EngineError::new(EngineErrorKind::UnknownPreset(id))),
        }
    }

    pub fn config(self) -> EngineConfig {
        match self {
            Preset::Classic => EngineConfig::classic(),
            Preset::Atom => EngineConfig::atom(),
        }
    }
}

impl EngineConfig {
    pub fn classic() -> Self {
        EngineConfig {
            start_running: false,
            ..EngineConfig::default()
        }
    }

    pub fn atom() -> Self {
        EngineConfig {
            size: 80,
            interval_secs: 0.05,
            ..EngineConfig::default()
        }
    }

    /// Reject configurations an engine cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_size(self.size)?;
        if !self.interval_secs.is_finite() || self.interval_secs < 0.0 {
            return Err(EngineError::new(EngineErrorKind::InvalidInterval(
                self.interval_secs,
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML config.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        debug!(?config, "Parsed engine config");
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}
