use std::fmt::{Debug, Display};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::templates;

/// Error for the HTML pages. Rendered as an error page in place of the
/// normal view.
pub struct ServerError(pub(crate) color_eyre::Report, pub(crate) StatusCode);

impl ServerError {
    /// What the visitor sees. Server side failures never leak their cause.
    fn public_message(&self) -> String {
        if self.1.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        }
    }
}

impl Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Status Code: {}\n", self.1))?;
        f.write_str("ServerError: \n")?;

        Debug::fmt(&self.0, f)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if self.1.is_server_error() {
            tracing::error!(error = ?self, "ServerError");
        } else {
            tracing::warn!(error = %self, status = %self.1, "Rejected page request");
        }

        (self.1, templates::error_page(&self.public_message())).into_response()
    }
}

impl From<color_eyre::Report> for ServerError {
    fn from(err: color_eyre::Report) -> Self {
        ServerError(err, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

pub(crate) trait WithStatus<T> {
    fn with_status(self, status: StatusCode) -> Result<T, ServerError>;
}

impl<T> WithStatus<T> for Result<T, color_eyre::Report> {
    fn with_status(self, status: StatusCode) -> Result<T, ServerError> {
        self.map_err(|err| ServerError(err, status))
    }
}

/// Error for the JSON API. Either the request was malformed or the store
/// let us down; nothing else can go wrong.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Invalid input")]
    InvalidInput(#[from] serde_json::Error),
    #[error("{message}")]
    StoreFailure {
        message: &'static str,
        report: color_eyre::Report,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(err) => {
                tracing::warn!(error = %err, "Rejected malformed request body");
                StatusCode::BAD_REQUEST
            }
            ApiError::StoreFailure { message, report } => {
                tracing::error!(error = ?report, public_message = message, "Store query failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub(crate) trait StoreContext<T> {
    /// Turns a store error into [`ApiError::StoreFailure`] with `message`
    /// as the only thing the client gets to see.
    fn store_failure(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> StoreContext<T> for color_eyre::Result<T> {
    fn store_failure(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|report| ApiError::StoreFailure { message, report })
    }
}
