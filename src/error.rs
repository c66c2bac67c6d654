//! Error types for rulegate
//!
//! Rule selection itself cannot fail. These errors cover the layers around
//! it: loading configuration and writing output.

use thiserror::Error;

/// Main error type for rulegate
#[derive(Error, Debug)]
pub enum RuleGateError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors that occur while loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize configuration or CLI metadata
    #[error("Failed to serialize: {message}")]
    Serialize {
        /// Description of the failure
        message: String,
    },
}

/// Errors that occur while rendering or writing output
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write an output file
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for RuleGateError {
    fn from(err: toml::de::Error) -> Self {
        RuleGateError::Config(ConfigError::Parse(err))
    }
}

impl From<toml::ser::Error> for RuleGateError {
    fn from(err: toml::ser::Error) -> Self {
        RuleGateError::Config(ConfigError::Serialize {
            message: err.to_string(),
        })
    }
}

impl From<serde_json::Error> for RuleGateError {
    fn from(err: serde_json::Error) -> Self {
        RuleGateError::Output(OutputError::Json(err))
    }
}
