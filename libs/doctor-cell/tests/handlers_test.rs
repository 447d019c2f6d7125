// Endpoint tests for the doctor cell, driven through the axum router with an
// in-memory SQLite database (migrations seed doctors 1-3).

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use doctor_cell::router::doctor_routes;
use shared_database::Db;

async fn test_app() -> (Db, Router) {
    let db = Db::from_url("sqlite::memory:").await.unwrap();
    let app = doctor_routes(db.clone());
    (db, app)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn book(db: &Db, doctor_id: i64, date: &str, start_time: &str) {
    sqlx::query(
        "INSERT INTO appointment (doctor_id, date, start_time, appointment_type, patient_name) \
         VALUES (?, ?, ?, 'checkup', 'Jane Doe')",
    )
    .bind(doctor_id)
    .bind(date)
    .bind(start_time)
    .execute(db.pool())
    .await
    .unwrap();
}

#[tokio::test]
async fn lists_seeded_doctors() {
    let (_db, app) = test_app().await;

    let (status, body) = get_json(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let doctors = body.as_array().unwrap();
    assert_eq!(doctors.len(), 3);
    assert_eq!(doctors[0]["working_hours_start"], "09:00");
}

#[tokio::test]
async fn gets_single_doctor() {
    let (_db, app) = test_app().await;

    let (status, body) = get_json(app, "/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["working_hours_end"], "13:00");
}

#[tokio::test]
async fn unknown_doctor_is_404() {
    let (_db, app) = test_app().await;

    let (status, _) = get_json(app, "/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn slots_for_empty_day_cover_the_whole_window() {
    // Doctor 3 works 09:00-10:00.
    let (_db, app) = test_app().await;

    let (status, body) = get_json(app, "/3/slots?date=2026-09-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available_slots"], serde_json::json!(["09:00", "09:30"]));
    assert_eq!(body["total_slots"], 2);
    assert_eq!(body["doctor_id"], 3);
}

#[tokio::test]
async fn booked_slot_is_excluded() {
    let (db, app) = test_app().await;
    book(&db, 3, "2026-09-01", "09:30").await;

    let (status, body) = get_json(app, "/3/slots?date=2026-09-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available_slots"], serde_json::json!(["09:00"]));
}

#[tokio::test]
async fn bookings_on_other_days_do_not_block_slots() {
    let (db, app) = test_app().await;
    book(&db, 3, "2026-09-02", "09:30").await;

    let (_, body) = get_json(app, "/3/slots?date=2026-09-01").await;

    assert_eq!(body["available_slots"], serde_json::json!(["09:00", "09:30"]));
}

#[tokio::test]
async fn slots_for_unknown_doctor_is_404() {
    let (_db, app) = test_app().await;

    let (status, _) = get_json(app, "/999/slots?date=2026-09-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_date_is_400() {
    let (_db, app) = test_app().await;

    let (status, _) = get_json(app, "/3/slots?date=not-a-date").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
