use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::projects::core::project::ProjectDetails;
use crate::shared::core::primitives::EntityId;
use crate::shell::http::rejected_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListProjectsParams {
    pub active: Option<bool>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> impl IntoResponse {
    match state.projects.list(params.active).await {
        Ok(projects) => Json(projects).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<EntityId>) -> impl IntoResponse {
    match state.projects.get(id).await {
        Ok(project) => Json(project).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ProjectDetails>, JsonRejection>,
) -> impl IntoResponse {
    let Json(details) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    match state.projects.create(details).await {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    body: Result<Json<ProjectDetails>, JsonRejection>,
) -> impl IntoResponse {
    let Json(details) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    match state.projects.update(id, details).await {
        Ok(project) => Json(project).into_response(),
        Err(e) => e.into_response(),
    }
}
