//! Domain errors and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid data")]
    Validation(Vec<String>),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("E-mail or password are incorrect")]
    InvalidCredentials,
    #[error("A user with this e-mail already exists")]
    DuplicatedEmail,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn unauthorized() -> Self {
        AppError::Unauthorized("You must be logged in to continue".into())
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "InvalidDataError",
            AppError::Conflict(_) => "ConflictError",
            AppError::NotFound(_) => "NotFoundError",
            AppError::Unauthorized(_) => "UnauthorizedError",
            AppError::InvalidCredentials => "InvalidCredentialsError",
            AppError::DuplicatedEmail => "DuplicatedEmailError",
            AppError::Internal(_) => "InternalServerError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) | AppError::DuplicatedEmail => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UniqueViolation { constraint } => {
                AppError::Conflict(format!("Record already exists ({constraint})"))
            }
            StoreError::Database(e) => AppError::Internal(anyhow::Error::new(e)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub name: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let name = self.name();
        let message = match &self {
            AppError::Internal(e) => {
                error!(error = ?e, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let details = match self {
            AppError::Validation(details) => Some(details),
            _ => None,
        };
        (
            status,
            Json(ErrorBody {
                name,
                message,
                details,
            }),
        )
            .into_response()
    }
}
