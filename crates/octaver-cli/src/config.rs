//! Session configuration files.
//!
//! A session file is TOML with any subset of the processing settings:
//!
//! ```toml
//! gain_db = -3.0
//! block_size = 256
//! stride = "decimate"
//! bit_depth = 24
//! log_file = "octaver.log"
//! ```
//!
//! Command-line flags override file values; anything left unset falls back
//! to the defaults in [`ProcessSettings`].

use clap::ValueEnum;
use octaver_effects::InputStride;
use octaver_io::DEFAULT_BLOCK_SIZE;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a session file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid value for '{field}': {reason}")]
    Invalid {
        /// Setting name.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Input stride as written in session files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrideSetting {
    /// Every other input sample, doubled back by replication.
    #[default]
    Decimate,
    /// Every input sample; the buffer grows.
    Every,
}

impl From<StrideSetting> for InputStride {
    fn from(s: StrideSetting) -> Self {
        match s {
            StrideSetting::Decimate => InputStride::Decimate,
            StrideSetting::Every => InputStride::Every,
        }
    }
}

/// Session file contents. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Gain in dB.
    pub gain_db: Option<f32>,
    /// Processing block size.
    pub block_size: Option<usize>,
    /// Input stride.
    pub stride: Option<StrideSetting>,
    /// Output bit depth.
    pub bit_depth: Option<u16>,
    /// Run log destination.
    pub log_file: Option<PathBuf>,
}

impl SessionConfig {
    /// Load and parse a session file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse session TOML.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Take every value set in `overrides`, keeping ours where it is unset.
    pub fn merge(self, overrides: SessionConfig) -> SessionConfig {
        SessionConfig {
            gain_db: overrides.gain_db.or(self.gain_db),
            block_size: overrides.block_size.or(self.block_size),
            stride: overrides.stride.or(self.stride),
            bit_depth: overrides.bit_depth.or(self.bit_depth),
            log_file: overrides.log_file.or(self.log_file),
        }
    }

    /// Fill defaults and validate.
    pub fn resolve(self) -> Result<ProcessSettings, ConfigError> {
        let settings = ProcessSettings {
            gain_db: self.gain_db.unwrap_or(0.0),
            block_size: self.block_size.unwrap_or(DEFAULT_BLOCK_SIZE),
            stride: self.stride.unwrap_or_default(),
            bit_depth: self.bit_depth.unwrap_or(32),
            log_file: self.log_file,
        };

        if !settings.gain_db.is_finite() {
            return Err(ConfigError::Invalid {
                field: "gain_db",
                reason: format!("{} is not a finite number", settings.gain_db),
            });
        }
        if settings.block_size == 0 {
            return Err(ConfigError::Invalid {
                field: "block_size",
                reason: "must be at least 1".into(),
            });
        }
        if !matches!(settings.bit_depth, 16 | 24 | 32) {
            return Err(ConfigError::Invalid {
                field: "bit_depth",
                reason: format!("{} (expected 16, 24 or 32)", settings.bit_depth),
            });
        }

        Ok(settings)
    }
}

/// Fully resolved processing settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSettings {
    /// Gain in dB, passed to the effect unchanged.
    pub gain_db: f32,
    /// Processing block size.
    pub block_size: usize,
    /// Input stride.
    pub stride: StrideSetting,
    /// Output bit depth.
    pub bit_depth: u16,
    /// Run log destination, if any.
    pub log_file: Option<PathBuf>,
}
