//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;
use thiserror::Error;
use tracing::error;

const MISSING_INFO: &str = "member not found or info missing";

#[derive(Error, Debug)]
pub enum ApiError {
    /// No member with the requested id
    #[error("{}", MISSING_INFO)]
    NotFound,

    /// The family has no members to list
    #[error("{}", MISSING_INFO)]
    NoMembers,

    /// Missing, empty, or mistyped request data
    #[error("{}", MISSING_INFO)]
    MissingInfo,

    #[error("age must be a positive integer")]
    InvalidAge,

    #[error("server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::NoMembers | ApiError::MissingInfo | ApiError::InvalidAge => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Internal(e) => {
                error!("Request failed: {:#}", e);
                json!({
                    "error": self.to_string(),
                    "message": format!("{:#}", e),
                })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Render a panic caught in a handler as a 500 response
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };
    ApiError::Internal(anyhow::anyhow!(detail)).into_response()
}
