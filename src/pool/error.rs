//! Pool-specific error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("no languages left to draw")]
    EmptyPool,

    #[error("source catalog not found: {0}")]
    SourceMissing(PathBuf),

    #[error("failed to persist pool: {0}")]
    Persist(std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PoolResult<T> = Result<T, PoolError>;
