use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::Db;
use shared_models::error::AppError;

use crate::models::{DoctorError, SlotsQuery};
use crate::services::{availability::AvailabilityService, doctor::DoctorService};

fn map_doctor_error(e: DoctorError) -> AppError {
    match e {
        DoctorError::NotFound => AppError::NotFound("Doctor not found".to_string()),
        DoctorError::InvalidTime(err) => AppError::ValidationError(err.to_string()),
        DoctorError::Database(err) => AppError::Database(err.to_string()),
    }
}

#[axum::debug_handler]
pub async fn list_doctors(State(db): State<Db>) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&db);

    let doctors = doctor_service
        .list_doctors()
        .await
        .map_err(map_doctor_error)?;

    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(db): State<Db>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&db);

    let doctor = doctor_service
        .get_doctor(doctor_id)
        .await
        .map_err(map_doctor_error)?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(db): State<Db>,
    Path(doctor_id): Path<i64>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<Value>, AppError> {
    let availability_service = AvailabilityService::new(&db);

    let slots = availability_service
        .available_slots(doctor_id, query.date)
        .await
        .map_err(map_doctor_error)?;

    Ok(Json(json!({
        "available_slots": slots,
        "doctor_id": doctor_id,
        "date": query.date,
        "total_slots": slots.len()
    })))
}
