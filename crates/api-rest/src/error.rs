//! Translation of failures into HTTP error responses.
//!
//! Handlers and extractors return [`ApiError`]. Its response carries only a status code and a
//! [`Failure`] extension; [`translate_failures`], which wraps every route, is the one place that
//! logs failures and renders the JSON envelope:
//!
//! ```json
//! { "timestamp": "...", "status": 404, "error": "Not Found", "message": "...", "path": "/recipes/x" }
//! ```
//!
//! For validation failures `message` is an object mapping field name to violation message.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Request,
    },
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use chrono::{DateTime, Utc};
use cookbook_core::{ErrorCategory, FieldErrors, RecipeError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    /// Reason phrase of `status`.
    pub error: String,
    /// A string, or a field-to-message object for validation failures.
    #[schema(value_type = Object)]
    pub message: Value,
    pub path: String,
}

/// Failure categories a request can end in.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(FieldErrors),
    /// The request could not be bound (malformed JSON, wrong content type, bad path segment).
    Rejected { status: StatusCode, message: String },
    Unhandled(String),
}

impl ApiError {
    fn into_failure(self) -> Failure {
        match self {
            ApiError::NotFound(message) => Failure {
                status: StatusCode::NOT_FOUND,
                category: "not_found",
                message: Value::String(message),
            },
            ApiError::Validation(fields) => Failure {
                status: StatusCode::BAD_REQUEST,
                category: "validation",
                message: Value::Object(
                    fields
                        .into_iter()
                        .map(|(field, message)| (field, Value::String(message)))
                        .collect(),
                ),
            },
            ApiError::Rejected { status, message } => Failure {
                status,
                category: "bad_request",
                message: Value::String(message),
            },
            ApiError::Unhandled(message) => Failure {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                category: "unhandled",
                message: Value::String(message),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let failure = self.into_failure();
        let mut response = failure.status.into_response();
        response.extensions_mut().insert(failure);
        response
    }
}

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::Validation(fields) => ApiError::Validation(fields),
            other => match other.category() {
                ErrorCategory::NotFound => ApiError::NotFound(other.to_string()),
                _ => ApiError::Unhandled(other.to_string()),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// A classified failure waiting to be rendered by [`translate_failures`].
#[derive(Clone, Debug)]
pub(crate) struct Failure {
    status: StatusCode,
    category: &'static str,
    message: Value,
}

impl Failure {
    fn unclassified(status: StatusCode) -> Self {
        Failure {
            status,
            category: "unclassified",
            message: Value::String(reason_phrase(status).to_string()),
        }
    }

    fn into_envelope_response(self, path: &str) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = self.status.as_u16(),
                category = self.category,
                path,
                "request failed: {}",
                self.message
            );
        } else {
            tracing::warn!(
                status = self.status.as_u16(),
                category = self.category,
                path,
                "request failed: {}",
                self.message
            );
        }

        let envelope = ErrorEnvelope {
            timestamp: Utc::now(),
            status: self.status.as_u16(),
            error: reason_phrase(self.status).to_string(),
            message: self.message,
            path: path.to_string(),
        };

        (self.status, Json(envelope)).into_response()
    }
}

fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown")
}

/// Middleware that renders any [`Failure`] left on a response as an [`ErrorEnvelope`].
///
/// Error statuses produced by the router itself (such as 405 on a known path) carry no
/// `Failure`; they are enveloped with their reason phrase as `message`, keeping `Allow`.
pub async fn translate_failures(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if let Some(failure) = response.extensions_mut().remove::<Failure>() {
        return failure.into_envelope_response(&path);
    }

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let allow = response.headers_mut().remove(header::ALLOW);
    let mut enveloped = Failure::unclassified(status).into_envelope_response(&path);
    if let Some(allow) = allow {
        enveloped.headers_mut().insert(header::ALLOW, allow);
    }
    enveloped
}

/// Wraps `router` so that panics become 500 failures and every failure is enveloped.
pub fn with_failure_handling<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(panic_failure))
        .layer(middleware::from_fn(translate_failures))
}

fn panic_failure(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "request handler panicked".to_string()
    };

    ApiError::Unhandled(message).into_response()
}
