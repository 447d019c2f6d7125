use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_database::Db;

use crate::handlers;

pub fn appointment_routes(db: Db) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/", post(handlers::create_appointment))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}", put(handlers::update_appointment))
        .route("/{appointment_id}", delete(handlers::delete_appointment))
        .with_state(db)
}
