use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::modules::time_entries::core::query_plan::TimeEntryFilter;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Query(filter): Query<TimeEntryFilter>,
) -> impl IntoResponse {
    match state.list_time_entries.handle(filter).await {
        Ok(views) => Json(views).into_response(),
        Err(e) => e.into_response(),
    }
}
