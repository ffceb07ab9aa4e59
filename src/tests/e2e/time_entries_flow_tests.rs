use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::stores::seeded_state;

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_default())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn hours(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn records_updates_and_deletes_a_time_entry() {
    let app = router(seeded_state().await);

    let created = send(
        &app,
        "POST",
        "/api/v1/time-entries",
        Some(r#"{"employeeId":2,"projectId":2,"date":"2025-01-09","hours":"5.50","description":"Pairing"}"#),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(id, 5);
    assert_eq!(created["employeeName"], "Jane Smith");
    assert_eq!(created["projectName"], "Mobile Redesign");

    let fetched = json_body(send(&app, "GET", &format!("/api/v1/time-entries/{id}"), None).await).await;
    assert_eq!(hours(&fetched["hours"]), Decimal::new(550, 2));

    let updated = send(
        &app,
        "PUT",
        &format!("/api/v1/time-entries/{id}"),
        Some(r#"{"employeeId":2,"projectId":1,"date":"2025-01-09","hours":"24.00"}"#),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = json_body(updated).await;
    assert_eq!(updated["projectName"], "Timesheet App");
    assert_eq!(hours(&updated["hours"]), Decimal::new(24, 0));

    let listed = json_body(send(&app, "GET", "/api/v1/time-entries?employeeId=2", None).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let deleted = send(&app, "DELETE", &format!("/api/v1/time-entries/{id}"), None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = send(&app, "GET", &format!("/api/v1/time-entries/{id}"), None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(missing).await["error"],
        format!("Time entry not found with id: {id}")
    );
}

#[tokio::test]
async fn rejects_a_second_entry_that_would_exceed_the_daily_cap() {
    let app = router(seeded_state().await);

    let first = send(
        &app,
        "POST",
        "/api/v1/time-entries",
        Some(r#"{"employeeId":1,"projectId":2,"date":"2025-01-06","hours":"16.00"}"#),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = send(
        &app,
        "POST",
        "/api/v1/time-entries",
        Some(r#"{"employeeId":1,"projectId":1,"date":"2025-01-06","hours":"0.25"}"#),
    )
    .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(second).await["error"],
        "total hours per employee per day cannot exceed 24"
    );

    let day = json_body(
        send(
            &app,
            "GET",
            "/api/v1/time-entries?employeeId=1&startDate=2025-01-06&endDate=2025-01-06",
            None,
        )
        .await,
    )
    .await;
    let total: Decimal = day
        .as_array()
        .unwrap()
        .iter()
        .map(|e| hours(&e["hours"]))
        .sum();
    assert_eq!(total, Decimal::new(24, 0));
}

#[tokio::test]
async fn manages_identities_used_by_new_entries() {
    let app = router(seeded_state().await);

    let employee = send(
        &app,
        "POST",
        "/api/v1/employees",
        Some(r#"{"firstName":"Alice","lastName":"Williams","email":"alice.williams@keyhole.com"}"#),
    )
    .await;
    assert_eq!(employee.status(), StatusCode::CREATED);
    let employee_id = json_body(employee).await["id"].as_i64().unwrap();

    let project = send(
        &app,
        "POST",
        "/api/v1/projects",
        Some(r#"{"name":"Data Platform","code":"DPL","active":true}"#),
    )
    .await;
    assert_eq!(project.status(), StatusCode::CREATED);
    let project_id = json_body(project).await["id"].as_i64().unwrap();

    let body = format!(
        r#"{{"employeeId":{employee_id},"projectId":{project_id},"date":"2025-01-08","hours":"2.75"}}"#
    );
    let entry = send(&app, "POST", "/api/v1/time-entries", Some(&body)).await;
    assert_eq!(entry.status(), StatusCode::CREATED);
    let entry = json_body(entry).await;
    assert_eq!(entry["employeeName"], "Alice Williams");
    assert_eq!(entry["projectName"], "Data Platform");

    let by_project = json_body(
        send(&app, "GET", &format!("/api/v1/time-entries?projectId={project_id}"), None).await,
    )
    .await;
    assert_eq!(by_project.as_array().unwrap().len(), 1);
}
