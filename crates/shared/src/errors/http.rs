use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(_) => HttpError::BadRequest(err.to_string()),
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            ServiceError::Repo(repo_err) => {
                error!("❌ Backend failure: {repo_err}");
                HttpError::Internal(INTERNAL_SERVER_ERROR.into())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: msg })).into_response()
    }
}
