//! Core error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
