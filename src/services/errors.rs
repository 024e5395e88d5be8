use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
