use archivist_core::error::CoreError;
use archivist_core::types::DbId;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error", "details"? }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `archivist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed query, with the endpoint-specific message shown to clients.
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The query string did not deserialize into the endpoint's parameters.
    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),

    /// No route matched the request path.
    #[error("Route not found")]
    RouteNotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                (StatusCode::NOT_FOUND, format!("{entity} not found"), None)
            }
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Database { context, source } => {
                tracing::error!(error = %source, "{context}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    context.to_string(),
                    Some(source.to_string()),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::InvalidQuery(rejection) => (
                StatusCode::BAD_REQUEST,
                "Invalid query parameters".to_string(),
                Some(rejection.body_text()),
            ),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "Not found".to_string(), None),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}

/// Attach the client-facing 500 message to a repository result.
pub trait DataAccessContext<T> {
    fn context(self, context: &'static str) -> AppResult<T>;
}

impl<T> DataAccessContext<T> for Result<T, sqlx::Error> {
    fn context(self, context: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Database { context, source })
    }
}

/// Turn an absent lookup result into a 404 for `entity`.
pub fn found<T>(value: Option<T>, entity: &'static str, id: DbId) -> AppResult<T> {
    value.ok_or(AppError::Core(CoreError::NotFound { entity, id }))
}
