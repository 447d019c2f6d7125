use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::Db;
use shared_models::error::AppError;

use crate::models::{AppointmentError, BookAppointmentRequest, UpdateAppointmentRequest};
use crate::services::booking::AppointmentBookingService;

fn map_appointment_error(e: AppointmentError) -> AppError {
    match e {
        AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
        AppointmentError::DoctorNotFound => AppError::NotFound("Doctor not found".to_string()),
        AppointmentError::SlotTaken => AppError::Conflict("Time slot not available".to_string()),
        AppointmentError::MissingField(field) => {
            AppError::BadRequest(format!("Missing required field: {field}"))
        }
        AppointmentError::InvalidStartTime(err) => AppError::ValidationError(err.to_string()),
        AppointmentError::Database(err) => AppError::Database(err.to_string()),
    }
}

#[axum::debug_handler]
pub async fn list_appointments(State(db): State<Db>) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&db);

    let appointments = booking_service
        .list_appointments()
        .await
        .map_err(map_appointment_error)?;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(db): State<Db>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&db);

    let appointment = booking_service
        .get_appointment(appointment_id)
        .await
        .map_err(map_appointment_error)?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(db): State<Db>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking_service = AppointmentBookingService::new(&db);

    let appointment = booking_service
        .book_appointment(request)
        .await
        .map_err(map_appointment_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Appointment created successfully",
            "appointment": appointment
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(db): State<Db>,
    Path(appointment_id): Path<i64>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&db);

    let appointment = booking_service
        .update_appointment(appointment_id, request)
        .await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "message": "Appointment updated successfully",
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(db): State<Db>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&db);

    booking_service
        .delete_appointment(appointment_id)
        .await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "message": "Appointment deleted successfully"
    })))
}
