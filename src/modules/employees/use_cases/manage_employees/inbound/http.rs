use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::employees::core::employee::EmployeeDetails;
use crate::shared::core::primitives::EntityId;
use crate::shell::http::rejected_body;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.employees.list().await {
        Ok(employees) => Json(employees).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<EntityId>) -> impl IntoResponse {
    match state.employees.get(id).await {
        Ok(employee) => Json(employee).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EmployeeDetails>, JsonRejection>,
) -> impl IntoResponse {
    let Json(details) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    match state.employees.create(details).await {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    body: Result<Json<EmployeeDetails>, JsonRejection>,
) -> impl IntoResponse {
    let Json(details) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    match state.employees.update(id, details).await {
        Ok(employee) => Json(employee).into_response(),
        Err(e) => e.into_response(),
    }
}
