use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::core::primitives::EntityId;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<EntityId>) -> impl IntoResponse {
    match state.delete_time_entry.handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
