//! Error types for the data-mocker CLI.

use thiserror::Error;

use crate::error::{ConfigError, GenerationError, RegistryError};

/// Errors surfaced by CLI parsing and generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// No category was supplied.
    #[error("missing category; run with --help to list them")]
    MissingCategory,
    /// The category is not one the CLI knows.
    #[error("unknown category: {value}")]
    UnknownCategory {
        /// Category that was not recognised.
        value: String,
    },
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// A non-numeric flag value was rejected.
    #[error("invalid value for {flag}: '{value}' ({message})")]
    InvalidValue {
        /// Flag associated with the value.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Why the value was rejected.
        message: String,
    },
    /// The configuration file could not be loaded.
    #[error("config error: {source}")]
    Config {
        /// Underlying configuration error.
        #[from]
        #[source]
        source: ConfigError,
    },
    /// The provider registry could not be built.
    #[error("registry error: {source}")]
    Registry {
        /// Underlying registry error.
        #[from]
        #[source]
        source: RegistryError,
    },
    /// A generator rejected the request.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
}
