use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::modules::time_entries::core::time_entry::RecordTimeEntry;
use crate::shared::core::primitives::EntityId;
use crate::shell::http::rejected_body;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    body: Result<Json<RecordTimeEntry>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };

    match state.update_time_entry.handle(id, command).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}
