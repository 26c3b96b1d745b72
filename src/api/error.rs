//! HTTP-facing errors.
//!
//! Every error body has the shape `{"detail": "..."}`.

use crate::order_actor::OrderError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Pizza not available")]
    PizzaNotAvailable,

    #[error("Order not found")]
    OrderNotFound,

    #[error("OPENAI_API_KEY is not set on the server")]
    MissingApiKey,

    /// The realtime API answered with a non-200 status; its body is passed through.
    #[error("{body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request could not be extracted (bad JSON, wrong content type, bad path).
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::PizzaNotAvailable => StatusCode::BAD_REQUEST,
            ApiError::OrderNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingApiKey | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } | ApiError::Rejected { status, .. } => *status,
            ApiError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::PizzaNotAvailable(_) => ApiError::PizzaNotAvailable,
            OrderError::NotFound(_) => ApiError::OrderNotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, error = %self, "Request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
