use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

use shared_utils::time::InvalidTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    pub id: i64,
    pub full_name: String,
    pub specialty: String,
    /// Daily working window start, "HH:MM" 24-hour.
    pub working_hours_start: String,
    /// Daily working window end, "HH:MM" 24-hour. Must lie within the same
    /// calendar day as the start.
    pub working_hours_end: String,
}

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error(transparent)]
    InvalidTime(#[from] InvalidTime),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
