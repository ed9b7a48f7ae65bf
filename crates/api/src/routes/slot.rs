use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/doctor/:doctor_id/slots",
        get(handlers::slot::list_slots).post(handlers::slot::create_slot),
    )
}
