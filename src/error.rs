use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the workshop library.
///
/// Contract violations (bad indices, malformed ranges) are reported here instead of
/// being clamped. A division without an exact integer result is not an error; the
/// reducer reports it as `None`.
#[derive(Error, Debug)]
pub enum WorkshopError {
    #[error("index {index} is out of range for a table of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid range [{start}, {end}] for text of {len} characters")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("slot {slot} does not fit in a 64-bit word of 2-bit codes")]
    SlotOutOfRange { slot: usize },

    #[error("invalid operator code {0:#04b}")]
    InvalidOperatorCode(u8),

    #[error("{operands} operands need {} operators, got {operators}", .operands.saturating_sub(1))]
    OperandCount { operands: usize, operators: usize },

    #[error("{operands} operands exceed the search limit of {max}")]
    TooManyOperands { operands: usize, max: usize },

    #[error("driver aged {age} is too young (minimum {minimum})")]
    AccessDenied { age: u32, minimum: u32 },

    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl WorkshopError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkshopError>;
