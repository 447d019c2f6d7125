use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use shared_database::Db;
use shared_utils::time::{format_hhmm, parse_hhmm, InvalidTime};

use crate::models::{Doctor, DoctorError};

/// Fixed slot length; every bookable slot starts on a 30-minute boundary
/// relative to the doctor's working window start.
pub const SLOT_LENGTH_MINUTES: u32 = 30;

pub struct AvailabilityService {
    db: Db,
}

impl AvailabilityService {
    pub fn new(db: &Db) -> Self {
        Self { db: db.clone() }
    }

    /// Compute the free slot start-times for a doctor on a given date.
    ///
    /// Reads the doctor's working window and the booked start-times for that
    /// date, then runs the pure slot calculation over the snapshot.
    pub async fn available_slots(
        &self,
        doctor_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<String>, DoctorError> {
        debug!("Calculating available slots for doctor {} on {}", doctor_id, date);

        let doctor = sqlx::query_as::<_, Doctor>(
            "SELECT id, full_name, specialty, working_hours_start, working_hours_end \
             FROM doctor WHERE id = ?",
        )
        .bind(doctor_id)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or(DoctorError::NotFound)?;

        let booked: Vec<String> =
            sqlx::query_scalar("SELECT start_time FROM appointment WHERE doctor_id = ? AND date = ?")
                .bind(doctor_id)
                .bind(date)
                .fetch_all(self.db.pool())
                .await?;
        let booked: HashSet<String> = booked.into_iter().collect();

        let slots = free_slots(
            &doctor.working_hours_start,
            &doctor.working_hours_end,
            &booked,
        )?;

        debug!("Found {} free slots", slots.len());
        Ok(slots)
    }
}

/// Walk the working window in fixed 30-minute steps and collect every slot
/// start that is not already booked.
///
/// The cursor starts at `work_start` (inclusive) and advances while strictly
/// before `work_end`. Minute overflow carries into the hour; the window is
/// assumed to stay within a single day, so there is no midnight carry. A
/// booked start blocks only the slot whose start matches it exactly,
/// regardless of that appointment's own length.
pub fn free_slots(
    work_start: &str,
    work_end: &str,
    booked: &HashSet<String>,
) -> Result<Vec<String>, InvalidTime> {
    let (mut hours, mut minutes) = parse_hhmm(work_start)?;
    let end = parse_hhmm(work_end)?;

    let mut slots = Vec::new();
    while (hours, minutes) < end {
        let cursor = format_hhmm(hours, minutes);
        if !booked.contains(&cursor) {
            slots.push(cursor);
        }

        minutes += SLOT_LENGTH_MINUTES;
        if minutes >= 60 {
            minutes -= 60;
            hours += 1;
        }
    }

    Ok(slots)
}
