//! The storage port the HTTP layer is built against.

use async_trait::async_trait;
use eyre::Result;

use crate::models::{
    doctor::{Doctor, NewDoctor},
    slot::{NewSlot, Slot},
};

/// Persistence capabilities required by the API.
///
/// Every write is a single insert that is committed before the call
/// returns. Nothing here coordinates concurrent writers.
#[async_trait]
pub trait ClinicStore: Send + Sync {
    async fn find_doctor_by_id(&self, id: i64) -> Result<Option<Doctor>>;

    async fn save_doctor(&self, doctor: NewDoctor) -> Result<Doctor>;

    /// Slots owned by `doctor_id`, in insertion order.
    async fn find_slots_by_doctor(&self, doctor_id: i64) -> Result<Vec<Slot>>;

    /// Fails when `slot.doctor_id` does not reference an existing doctor.
    async fn save_slot(&self, slot: NewSlot) -> Result<Slot>;
}
