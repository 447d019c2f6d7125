use tracing::debug;

use shared_database::Db;
use shared_utils::time::parse_hhmm;

use crate::models::{
    Appointment, AppointmentError, BookAppointmentRequest, UpdateAppointmentRequest,
};

const SELECT_APPOINTMENT: &str =
    "SELECT id, doctor_id, date, start_time, appointment_type, patient_name, notes \
     FROM appointment";

pub struct AppointmentBookingService {
    db: Db,
}

impl AppointmentBookingService {
    pub fn new(db: &Db) -> Self {
        Self { db: db.clone() }
    }

    /// Book a new appointment.
    ///
    /// The duplicate-slot check and the insert run inside one transaction, and
    /// the unique index on (doctor_id, date, start_time) converts a concurrent
    /// identical create into the same `SlotTaken` failure.
    pub async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let doctor_id = request
            .doctor_id
            .ok_or(AppointmentError::MissingField("doctor_id"))?;
        let date = request.date.ok_or(AppointmentError::MissingField("date"))?;
        let start_time = require_text(request.start_time, "start_time")?;
        let appointment_type = require_text(request.appointment_type, "appointment_type")?;
        let patient_name = require_text(request.patient_name, "patient_name")?;
        let notes = request.notes.unwrap_or_default();

        parse_hhmm(&start_time)?;

        debug!("Booking appointment for doctor {} on {} at {}", doctor_id, date, start_time);

        let doctor: Option<i64> = sqlx::query_scalar("SELECT id FROM doctor WHERE id = ?")
            .bind(doctor_id)
            .fetch_optional(self.db.pool())
            .await?;
        if doctor.is_none() {
            return Err(AppointmentError::DoctorNotFound);
        }

        let mut tx = self.db.pool().begin().await?;

        let existing: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM appointment WHERE doctor_id = ? AND date = ? AND start_time = ?",
        )
        .bind(doctor_id)
        .bind(date)
        .bind(&start_time)
        .fetch_optional(&mut *tx)
        .await?;
        if existing.is_some() {
            return Err(AppointmentError::SlotTaken);
        }

        let result = sqlx::query(
            "INSERT INTO appointment (doctor_id, date, start_time, appointment_type, patient_name, notes) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(doctor_id)
        .bind(date)
        .bind(&start_time)
        .bind(&appointment_type)
        .bind(&patient_name)
        .bind(&notes)
        .execute(&mut *tx)
        .await
        .map_err(slot_taken_on_unique_violation)?;

        let appointment_id = result.last_insert_rowid();
        tx.commit().await?;

        debug!("Appointment created with id {}", appointment_id);
        self.get_appointment(appointment_id).await
    }

    /// Fetch a single appointment by id.
    pub async fn get_appointment(
        &self,
        appointment_id: i64,
    ) -> Result<Appointment, AppointmentError> {
        sqlx::query_as::<_, Appointment>(&format!("{SELECT_APPOINTMENT} WHERE id = ?"))
            .bind(appointment_id)
            .fetch_optional(self.db.pool())
            .await?
            .ok_or(AppointmentError::NotFound)
    }

    /// Fetch all appointments.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let appointments =
            sqlx::query_as::<_, Appointment>(&format!("{SELECT_APPOINTMENT} ORDER BY id"))
                .fetch_all(self.db.pool())
                .await?;

        Ok(appointments)
    }

    /// Overwrite an existing appointment's date, start time, type, patient
    /// name, and notes (notes default to empty when omitted).
    pub async fn update_appointment(
        &self,
        appointment_id: i64,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let date = request.date.ok_or(AppointmentError::MissingField("date"))?;
        let start_time = require_text(request.start_time, "start_time")?;
        let appointment_type = require_text(request.appointment_type, "appointment_type")?;
        let patient_name = require_text(request.patient_name, "patient_name")?;
        let notes = request.notes.unwrap_or_default();

        parse_hhmm(&start_time)?;

        // Existence check first so a missing row maps to NotFound.
        self.get_appointment(appointment_id).await?;

        debug!("Updating appointment {}", appointment_id);

        // There is no cross-appointment conflict pre-check here; the unique
        // slot index is the only guard against moving onto an occupied slot.
        sqlx::query(
            "UPDATE appointment \
             SET date = ?, start_time = ?, appointment_type = ?, patient_name = ?, notes = ? \
             WHERE id = ?",
        )
        .bind(date)
        .bind(&start_time)
        .bind(&appointment_type)
        .bind(&patient_name)
        .bind(&notes)
        .bind(appointment_id)
        .execute(self.db.pool())
        .await
        .map_err(slot_taken_on_unique_violation)?;

        self.get_appointment(appointment_id).await
    }

    /// Permanently remove an appointment.
    pub async fn delete_appointment(&self, appointment_id: i64) -> Result<(), AppointmentError> {
        self.get_appointment(appointment_id).await?;

        debug!("Deleting appointment {}", appointment_id);

        sqlx::query("DELETE FROM appointment WHERE id = ?")
            .bind(appointment_id)
            .execute(self.db.pool())
            .await?;

        Ok(())
    }
}

fn require_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, AppointmentError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppointmentError::MissingField(field)),
    }
}

fn slot_taken_on_unique_violation(e: sqlx::Error) -> AppointmentError {
    if e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
    {
        AppointmentError::SlotTaken
    } else {
        AppointmentError::Database(e)
    }
}
