//! Error types for the data-mocker crate.
//!
//! Generation failures, provider lookups and configuration loading each get
//! their own semantic enum, following the project's `thiserror` conventions.
//! Every error is raised synchronously at the offending call; nothing is
//! retried or defaulted behind the caller's back.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the generators when a request cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The caller supplied malformed or out-of-domain input.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected input.
        message: String,
    },

    /// A well-formed range admits no value satisfying the request.
    #[error("invalid range: {message}")]
    InvalidRange {
        /// Description of the empty or inverted range.
        message: String,
    },

    /// A bounded retry loop gave up before producing a usable value.
    #[error("failed to generate {what} after {max_attempts} attempts")]
    Exhausted {
        /// The kind of value being generated.
        what: &'static str,
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}

impl GenerationError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }
}

/// Errors raised while building or querying the provider registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No provider is registered under the requested key.
    #[error("no provider found for: {key}")]
    ProviderNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// A custom provider tried to claim a built-in category key.
    #[error("provider key '{key}' is reserved for a built-in generator")]
    ReservedKey {
        /// The reserved key.
        key: String,
    },

    /// The provider registered under the key is not of the requested type.
    #[error("provider '{key}' is not of the requested type")]
    ProviderTypeMismatch {
        /// The key whose provider had an unexpected type.
        key: String,
    },
}

/// Errors that can occur when loading a mocker configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file at '{path}': {message}")]
    IoError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The configuration JSON is malformed or missing required fields.
    #[error("invalid config JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The configuration version is not supported.
    #[error("unsupported config version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// A setting holds a value the generators cannot use.
    #[error("invalid value for '{field}': {message}")]
    InvalidSetting {
        /// Name of the offending setting.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}
