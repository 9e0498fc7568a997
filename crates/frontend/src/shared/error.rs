use thiserror::Error;

use contracts::shared::form::FieldId;

/// Ошибки доступа к localStorage
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read local storage: {0}")]
    Read(String),

    #[error("failed to write local storage: {0}")]
    Write(String),
}

/// Ошибки хранилища формы
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate field id: {0}")]
    DuplicateFieldId(FieldId),

    #[error("value of field {0} is not a finite number")]
    NonFiniteValue(FieldId),

    #[error("invalid form JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("form store is no longer available")]
    Disposed,
}
