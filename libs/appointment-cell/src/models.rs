use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

use shared_utils::time::InvalidTime;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub date: NaiveDate,
    /// Slot start time-of-day, "HH:MM" 24-hour. The legacy schema called this
    /// column "duration".
    pub start_time: String,
    pub appointment_type: String,
    pub patient_name: String,
    pub notes: String,
}

// ==============================================================================
// REQUEST DTOS
// ==============================================================================

/// All required fields are optional at the serde level so that an incomplete
/// body surfaces as a 400 with a named field rather than a decode rejection.
#[derive(Debug, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub appointment_type: Option<String>,
    pub patient_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub appointment_type: Option<String>,
    pub patient_name: Option<String>,
    pub notes: Option<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Time slot not available")]
    SlotTaken,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidStartTime(#[from] InvalidTime),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
