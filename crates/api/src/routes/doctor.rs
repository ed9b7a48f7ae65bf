use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/doctor",
        get(handlers::doctor::get_doctor).post(handlers::doctor::create_doctor),
    )
}
