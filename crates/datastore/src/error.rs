use thiserror::Error;

use crate::store::StoreError;

/// Faults a repository call can surface to the calling view.
///
/// Propagation policy: the calling view catches these and shows a blocking
/// alert; nothing is retried automatically.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read from the FAQ store: {0}")]
    RemoteRead(StoreError),

    #[error("failed to write to the FAQ store: {0}")]
    RemoteWrite(StoreError),

    #[error("category \"{0}\" already exists")]
    DuplicateCategory(String),

    #[error("{0}")]
    Validation(String),
}
