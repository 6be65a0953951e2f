use models::validation::ValidationErrors;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Failure of an admission or office operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// The input was rejected before any storage call
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The targeted record does not exist
    #[error("record not found: {0}")]
    NotFound(Uuid),
    /// The store was unreachable or rejected the write
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
