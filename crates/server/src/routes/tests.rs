use super::{admin_routes, public_routes};
use crate::{auth::AuthClaims, state::AppState};
use axum::{
    Extension, Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use database::services::account::AccountService;
use migration::{Migrator, MigratorTrait};
use models::account::{Office, Role};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    AppState::new(db)
}

/// The full app, with `email` standing in for a validated JWT
fn app(state: &AppState, email: Option<&str>) -> Router {
    let mut admin = admin_routes(state);
    if let Some(email) = email {
        admin = admin.layer(Extension(AuthClaims {
            sub: Some("subject".to_string()),
            email: Some(email.to_string()),
        }));
    }

    Router::new()
        .merge(public_routes())
        .nest("/admin", admin)
        .with_state(state.clone())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn admission_json(admission_no: &str) -> Value {
    json!({
        "admissionNo": admission_no,
        "firstName": "Ana",
        "lastName": "Cruz",
        "email": "ana@x.com",
        "phoneNumber": "09171234567",
        "course": "College Of Computer Studies",
        "program": "Bachelor of Science in Information Technology",
        "requirements": [{ "name": "Birth Certificate", "isSubmitted": true }]
    })
}

async fn submit(app: &Router, admission_no: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/admissions",
        Some(admission_json(admission_no)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    json_body(response).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_submit_then_track() {
    let state = state().await;
    let app = app(&state, None);

    let id = submit(&app, "2024-001").await;

    let response = send(&app, Method::GET, &format!("/admissions/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["admissionNo"], "2024-001");
    assert_eq!(body["requirements"][0]["isSubmitted"], true);

    let response = send(&app, Method::GET, "/admissions?number=2024-001", None).await;
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_validation_errors_are_field_level() {
    let state = state().await;
    let app = app(&state, None);

    let mut body = admission_json("2024-002");
    body["email"] = json!("ana");
    body["requirements"] = json!([{ "name": "Birth Certificate", "isSubmitted": false }]);

    let response = send(&app, Method::POST, "/admissions", Some(body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response).await;
    assert_eq!(body["error"], "validation failed");
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "requirements"]);
}

#[tokio::test]
async fn test_missing_admission_is_not_found() {
    let state = state().await;
    let app = app(&state, None);

    let response = send(
        &app,
        Method::GET,
        "/admissions/6f1c2a9e-8d0b-4c4e-9a57-0d7f1b2c3d4e",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "record not found");

    let response = send(&app, Method::GET, "/admissions?number=0000", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_save_rejects_mismatched_id() {
    let state = state().await;
    let app = app(&state, None);
    let id = submit(&app, "2024-003").await;

    let mut body = admission_json("2024-003");
    body["id"] = json!("6f1c2a9e-8d0b-4c4e-9a57-0d7f1b2c3d4e");
    let response = send(&app, Method::PUT, &format!("/admissions/{id}"), Some(body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut body = admission_json("2024-003");
    body["firstName"] = json!("Anabelle");
    let response = send(&app, Method::PUT, &format!("/admissions/{id}"), Some(body)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, &format!("/admissions/{id}"), None).await;
    assert_eq!(json_body(response).await["firstName"], "Anabelle");
}

#[tokio::test]
async fn test_reviewer_sets_status_and_deletes() {
    let state = state().await;
    AccountService::create(&state.db, "osas@school.edu", "Osas Staff", Role::Staff, Office::Osas)
        .await
        .unwrap();
    let app = app(&state, Some("osas@school.edu"));
    let id = submit(&app, "2024-004").await;

    for status in ["Approved", "Pending"] {
        let response = send(
            &app,
            Method::PATCH,
            &format!("/admin/admissions/{id}/status"),
            Some(json!({ "status": status })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, Method::GET, &format!("/admissions/{id}"), None).await;
        assert_eq!(json_body(response).await["status"], status);
    }

    let response = send(&app, Method::GET, "/admin/admissions?status=Pending", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["pagination"]["total_items"], 1);

    let response = send(&app, Method::DELETE, &format!("/admin/admissions/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, &format!("/admissions/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::DELETE, &format!("/admin/admissions/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_requires_registered_account() {
    let state = state().await;

    let anonymous = app(&state, None);
    let response = send(&anonymous, Method::GET, "/admin/me", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let stranger = app(&state, Some("stranger@gmail.com"));
    let response = send(&stranger, Method::GET, "/admin/me", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_office_permissions() {
    let state = state().await;
    AccountService::create(
        &state.db,
        "registrar@school.edu",
        "Reg",
        Role::Staff,
        Office::Registrar,
    )
    .await
    .unwrap();
    AccountService::create(&state.db, "osas@school.edu", "Osas", Role::Staff, Office::Osas)
        .await
        .unwrap();

    let registrar = app(&state, Some("registrar@school.edu"));
    let response = send(&registrar, Method::GET, "/admin/admissions", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = send(&registrar, Method::GET, "/admin/events", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = send(&registrar, Method::GET, "/admin/accounts?office=Osas", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&registrar, Method::GET, "/admin/accounts", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await[0]["email"], "registrar@school.edu");

    // Events need a configured calendar before the provider is ever called
    let osas = app(&state, Some("osas@school.edu"));
    let response = send(&osas, Method::GET, "/admin/events", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(
        &osas,
        Method::PUT,
        "/admin/calendar",
        Some(json!({ "calendarId": "office@group.calendar.google.com" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&osas, Method::GET, "/admin/events", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_department_catalog() {
    let state = state().await;
    let app = app(&state, None);

    let response = send(&app, Method::GET, "/departments", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let departments = body.as_array().unwrap();
    assert_eq!(departments.len(), 5);
    assert_eq!(departments[0]["shortname"], "CCS");

    let response = send(&app, Method::GET, "/requirements", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let checklist = body.as_array().unwrap();
    assert_eq!(checklist.len(), 5);
    assert!(checklist.iter().all(|r| r["isSubmitted"] == false));

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
