//! incr-cli: increment integers from the command line
//!
//! The binary is a thin shell around [`run::increment_tokens`], which parses
//! each token as an `i32` and writes the incremented values one per line.

pub mod config;
pub mod run;

pub use config::{Config, ConfigError};
pub use run::{increment_token, increment_tokens, split_ascii_whitespace};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid value `{token}`: {reason}")]
    InvalidValue {
        token: String,
        reason: String,
    },

    #[error("cannot increment `{token}`: {source}")]
    Increment {
        token: String,
        source: incr::IncrError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
