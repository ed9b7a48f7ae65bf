use axum::{extract::State, Json};
use slotbook_core::{
    errors::ClinicError,
    models::doctor::{CreateDoctorResponse, DoctorResponse, NewDoctor},
};
use std::sync::Arc;

use crate::{
    middleware::{error_handling::AppError, fields::RequestFields},
    ApiState,
};

/// `GET /doctor?id=<id>`
///
/// The id is coerced rather than validated: a non-numeric id reads as `0`,
/// which never matches, so the caller gets the same 404 as for any unknown id.
#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<ApiState>>,
    fields: RequestFields,
) -> Result<Json<DoctorResponse>, AppError> {
    let id = fields.int("id");

    let doctor = state
        .store
        .find_doctor_by_id(id)
        .await?
        .ok_or_else(|| ClinicError::NotFound(format!("Doctor with ID {} not found", id)))?;

    Ok(Json(doctor.into()))
}

/// `POST /doctor`
#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<ApiState>>,
    fields: RequestFields,
) -> Result<Json<CreateDoctorResponse>, AppError> {
    let doctor = NewDoctor {
        first_name: fields.text("firstName")?,
        last_name: fields.text("lastName")?,
        specialization: fields.text("specialization")?,
    };

    let doctor = state.store.save_doctor(doctor).await?;
    tracing::info!("Doctor created: id={}", doctor.id);

    Ok(Json(CreateDoctorResponse { id: doctor.id }))
}
