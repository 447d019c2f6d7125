use tracing::debug;

use shared_database::Db;

use crate::models::{Doctor, DoctorError};

const SELECT_DOCTOR: &str =
    "SELECT id, full_name, specialty, working_hours_start, working_hours_end FROM doctor";

pub struct DoctorService {
    db: Db,
}

impl DoctorService {
    pub fn new(db: &Db) -> Self {
        Self { db: db.clone() }
    }

    /// Fetch all doctors.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Fetching all doctors");

        let doctors = sqlx::query_as::<_, Doctor>(&format!("{SELECT_DOCTOR} ORDER BY id"))
            .fetch_all(self.db.pool())
            .await?;

        Ok(doctors)
    }

    /// Fetch a single doctor by id.
    pub async fn get_doctor(&self, doctor_id: i64) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor: {}", doctor_id);

        sqlx::query_as::<_, Doctor>(&format!("{SELECT_DOCTOR} WHERE id = ?"))
            .bind(doctor_id)
            .fetch_optional(self.db.pool())
            .await?
            .ok_or(DoctorError::NotFound)
    }
}
