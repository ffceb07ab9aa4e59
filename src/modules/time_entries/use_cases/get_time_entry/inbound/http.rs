use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shared::core::primitives::EntityId;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<EntityId>) -> impl IntoResponse {
    match state.get_time_entry.handle(id).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}
