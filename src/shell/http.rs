use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::employees::use_cases::manage_employees::inbound::http as employees_http;
use crate::modules::projects::use_cases::manage_projects::inbound::http as projects_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::get_time_entry::inbound::http as get_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::time_entries::use_cases::record_time_entry::inbound::http as record_http;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::http as update_http;
use crate::shared::core::errors::ApplicationError;
use crate::shell::graphql::{self, AppSchema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());
    Router::new()
        .route(
            "/api/v1/time-entries",
            get(list_http::handle).post(record_http::handle),
        )
        .route(
            "/api/v1/time-entries/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route(
            "/api/v1/employees",
            get(employees_http::list).post(employees_http::create),
        )
        .route(
            "/api/v1/employees/{id}",
            get(employees_http::get).put(employees_http::update),
        )
        .route(
            "/api/v1/projects",
            get(projects_http::list).post(projects_http::create),
        )
        .route(
            "/api/v1/projects/{id}",
            get(projects_http::get).put(projects_http::update),
        )
        .with_state(state)
        .route("/gql", get(graphiql).post(graphql_handler))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

/// 422 for a body that is not the expected JSON shape.
pub fn rejected_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": rejection.body_text() })),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApplicationError::Validation(_) | ApplicationError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::Store(e) => {
                tracing::error!(error = %e, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
