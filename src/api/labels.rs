use std::collections::HashMap;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::response;
use crate::api::state::AppState;
use crate::ops;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(
        "/api/labels",
        get(list_labels_handler).post(create_label_handler),
    )
}

#[derive(Serialize)]
struct LabelListResponse {
    success: bool,
    data: Vec<String>,
    colors: HashMap<String, String>,
}

async fn list_labels_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(LabelListResponse {
        success: true,
        data: state.storage().load_labels(),
        colors: state.storage().load_label_colors(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct CreateLabelBody {
    #[serde(default)]
    name: String,
}

#[derive(Serialize)]
struct LabelCreatedResponse {
    success: bool,
    data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

async fn create_label_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateLabelBody>,
) -> Response {
    match ops::create_label(state.storage(), &body.name) {
        Ok(outcome) => Json(LabelCreatedResponse {
            success: true,
            message: (!outcome.created).then(|| "label already exists".to_string()),
            data: outcome.name,
        })
        .into_response(),
        Err(err) => response::failure(&err),
    }
}
