use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use slotbook_core::{
    coerce::parse_day,
    models::slot::{CreateSlotResponse, NewSlot, SlotResponse},
};
use std::sync::Arc;

use crate::{
    middleware::{error_handling::AppError, fields::RequestFields},
    ApiState,
};

/// `GET /doctor/:doctor_id/slots`
///
/// Answers `404` with an empty JSON array when the doctor is unknown, and
/// `200` with an empty array when the doctor simply has no slots.
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Path(doctor_id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(doctor) = state.store.find_doctor_by_id(doctor_id).await? else {
        tracing::debug!("Doctor with ID {} not found", doctor_id);
        return Ok(not_found());
    };

    let slots: Vec<SlotResponse> = state
        .store
        .find_slots_by_doctor(doctor.id)
        .await?
        .into_iter()
        .map(SlotResponse::from)
        .collect();

    Ok(Json(slots).into_response())
}

/// `POST /doctor/:doctor_id/slots`
///
/// The doctor is resolved before any field is interpreted; an unknown doctor
/// answers `404` with an empty JSON array. Slots are not checked against the
/// doctor's existing slots, so overlaps are accepted.
#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Path(doctor_id): Path<i64>,
    fields: RequestFields,
) -> Result<Response, AppError> {
    let Some(doctor) = state.store.find_doctor_by_id(doctor_id).await? else {
        tracing::debug!("Doctor with ID {} not found", doctor_id);
        return Ok(not_found());
    };

    let day_text = fields.text("day")?;
    let slot = NewSlot {
        doctor_id: doctor.id,
        day: parse_day(day_text.as_deref(), Utc::now().date_naive())?,
        from_hour: fields.text("from_hour")?,
        duration: fields.int("duration"),
    };

    let slot = state.store.save_slot(slot).await?;
    tracing::info!("Slot created: id={}, doctor_id={}", slot.id, slot.doctor_id);

    Ok(Json(CreateSlotResponse { id: slot.id }).into_response())
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(Vec::<SlotResponse>::new())).into_response()
}
