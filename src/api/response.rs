//! Failure-response helpers shared by the handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::TicketLabelError;

/// HTTP status for a failed operation.
pub(crate) fn status_for(err: &TicketLabelError) -> StatusCode {
    match err {
        TicketLabelError::EmptyField { .. } | TicketLabelError::NothingImported => {
            StatusCode::BAD_REQUEST
        },
        TicketLabelError::TicketNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `{success: false, message}` with the status derived from the error kind.
pub(crate) fn failure(err: &TicketLabelError) -> Response {
    (
        status_for(err),
        Json(json!({ "success": false, "message": err.user_message() })),
    )
        .into_response()
}

/// `{success: false, message}` with a fixed 400 status.
pub(crate) fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}
