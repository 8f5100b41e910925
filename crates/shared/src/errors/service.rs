use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),
}
