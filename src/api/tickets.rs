use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::response;
use crate::api::state::AppState;
use crate::core::{Ticket, TicketDraft};
use crate::{import, ops};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/tickets",
            get(list_tickets_handler).post(create_ticket_handler),
        )
        .route("/api/tickets/:id/label", put(update_label_handler))
        .route("/api/tickets/import", post(import_tickets_handler))
        .route("/api/next-id", get(next_id_handler))
}

#[derive(Serialize)]
struct TicketListResponse {
    success: bool,
    data: Vec<Ticket>,
}

async fn list_tickets_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(TicketListResponse {
        success: true,
        data: state.storage().load_tickets(),
    })
}

#[derive(Serialize)]
struct TicketResponse {
    success: bool,
    data: Ticket,
}

async fn create_ticket_handler(
    State(state): State<AppState>,
    Json(draft): Json<TicketDraft>,
) -> Response {
    match ops::create_ticket(state.storage(), draft) {
        Ok(ticket) => Json(TicketResponse {
            success: true,
            data: ticket,
        })
        .into_response(),
        Err(err) => response::failure(&err),
    }
}

#[derive(Debug, Default, Deserialize)]
struct UpdateLabelBody {
    #[serde(default)]
    label: Option<String>,
}

async fn update_label_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateLabelBody>,
) -> Response {
    match ops::update_ticket_label(state.storage(), id, body.label.as_deref()) {
        Ok(ticket) => Json(TicketResponse {
            success: true,
            data: ticket,
        })
        .into_response(),
        Err(err) => response::failure(&err),
    }
}

#[derive(Serialize)]
struct ImportResponse {
    success: bool,
    message: String,
}

async fn import_tickets_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut file_bytes: Option<Vec<u8>> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("file") {
                    match field.bytes().await {
                        Ok(bytes) => file_bytes = Some(bytes.to_vec()),
                        Err(err) => {
                            return response::bad_request(&format!("invalid file field: {err}"));
                        },
                    }
                }
            },
            Ok(None) => break,
            Err(err) => {
                return response::bad_request(&format!("invalid multipart payload: {err}"));
            },
        }
    }

    let Some(bytes) = file_bytes else {
        return response::bad_request("file is required");
    };
    if bytes.is_empty() {
        return response::bad_request("uploaded file is empty");
    }

    match import::import_csv(state.storage(), &bytes) {
        Ok(report) => Json(ImportResponse {
            success: true,
            message: format!("imported {} tickets", report.added),
        })
        .into_response(),
        Err(err) => response::failure(&err),
    }
}

#[derive(Serialize)]
struct NextIdResponse {
    success: bool,
    data: u64,
}

async fn next_id_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(NextIdResponse {
        success: true,
        data: ops::preview_next_id(state.storage()),
    })
}
