use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{ErrorCode, ErrorResponse};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::from_code(
        ErrorCode::NotFound,
        "The requested resource was not found".to_string(),
        None,
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
