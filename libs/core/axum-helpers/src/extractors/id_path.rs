//! Integer id path parameter extractor with automatic validation.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Extractor for integer id path parameters.
///
/// Parses the `{id}` path segment as an `i32`, returning a structured 400
/// response when the segment is not a valid integer.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item id: {}", id)
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i32>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => {
                let body = Json(ErrorResponse::from_code(
                    ErrorCode::InvalidId,
                    format!("Invalid id: {}", raw),
                    None,
                ));
                Err((StatusCode::BAD_REQUEST, body).into_response())
            }
        }
    }
}
