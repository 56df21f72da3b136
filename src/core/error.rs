//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::data::LoadError;

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    Zero(&'static str),
    InvalidHourDivisor(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Zero(x) => write!(f, "configuration field `{x}` must be non-zero"),
            ConfigError::InvalidHourDivisor(v) => {
                write!(f, "seconds per hour must be positive, got {v}")
            }
        }
    }
}
impl Error for ConfigError {}

/// The user kept answering a prompt with something we cannot use.
#[derive(Debug)]
pub enum PromptError {
    Exhausted { field: &'static str },
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Exhausted { field } => {
                write!(f, "Entered an invalid {field} too many times")
            }
            PromptError::Io(e) => write!(f, "console error: {e}"),
        }
    }
}
impl Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Load(LoadError),
    Prompt(PromptError),
    Config(ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "{e}"),
            AppError::Load(e) => write!(f, "{e}"),
            AppError::Prompt(e) => write!(f, "{e}"),
            AppError::Config(e) => write!(f, "{e}"),
        }
    }
}
impl Error for AppError {}

// automatic conversions
impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}
impl From<PromptError> for AppError {
    fn from(e: PromptError) -> Self {
        Self::Prompt(e)
    }
}
impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
