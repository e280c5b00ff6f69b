use caliper_canonical::ValidationError;
use caliper_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or dispatching envelopes.
#[derive(Error, Debug)]
pub enum SensorError {
    /// An envelope must carry at least one node.
    #[error("envelope has no data")]
    EmptyEnvelope,
    /// A node in the payload failed to serialize.
    #[error(transparent)]
    Core(#[from] CoreError),
    /// The envelope could not be converted to JSON.
    #[error("envelope encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    /// The transport refused or failed to deliver the envelope.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),
}

/// Errors loading or validating a sensor configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The TOML text could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A setting holds a value that is not allowed.
    #[error("invalid {field}: {source}")]
    Invalid {
        /// Setting name.
        field: &'static str,
        /// Validation failure.
        source: ValidationError,
    },
}

/// Failure signal returned by a [`Transport`](crate::Transport).
#[derive(Error, Debug)]
pub enum TransportError {
    /// The receiving side rejected the envelope.
    #[error("rejected: {0}")]
    Rejected(String),
}
