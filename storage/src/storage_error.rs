use thiserror::Error;

use tickdb_common::duration::DurationError;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("invalid dedup interval: {0}")]
    InvalidDedupInterval(#[from] DurationError),
}
