//! Error types for the adapter engine and its configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by adapter operations.
///
/// Out-of-range errors are programmer errors: they mean the host and the
/// engine disagree about the current item count. They are surfaced
/// immediately rather than clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// A physical (host-facing) position is not below the physical count.
    #[error("physical position {position} is out of range (physical count {count})")]
    PositionOutOfRange { position: usize, count: usize },

    /// A logical (data) index is not below the logical count.
    #[error("logical index {index} is out of range (item count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// `enter` was called while checkboxes were already visible.
    #[error("checkboxes are already visible; a checking session cannot be entered twice")]
    AlreadyActive,
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors that can occur while loading or saving an adapter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("failed to access adapter config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`AdapterConfig`](crate::AdapterConfig).
    #[error("invalid adapter config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize adapter config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
