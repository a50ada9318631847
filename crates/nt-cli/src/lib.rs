//! nt-demo library
//!
//! A guided tour of `nt-core` records: each [`sections::Section`] builds a
//! few records, checks what it claims about them and renders them as text or
//! JSON. The `nt-demo` binary wires this to the command line.

pub mod cli;
pub mod commands;
pub mod sections;

pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Record error: {0}")]
        Record(#[from] nt_core::Error),

        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),

        #[error("Check failed in section `{section}`: {message}")]
        Check {
            section: &'static str,
            message: String,
        },
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
