use axum::{routing::get, Router};

use shared_database::Db;

use crate::handlers;

pub fn doctor_routes(db: Db) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/slots", get(handlers::get_available_slots))
        .with_state(db)
}
