//! Host window error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Host window unavailable: {0}")]
    Unavailable(String),

    #[error("Host window operation failed: {0}")]
    Operation(String),
}
