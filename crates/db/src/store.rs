use async_trait::async_trait;
use eyre::Result;
use slotbook_core::{
    models::{
        doctor::{Doctor, NewDoctor},
        slot::{NewSlot, Slot},
    },
    store::ClinicStore,
};

use crate::{repositories, DbPool};

/// [`ClinicStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClinicStore for PgStore {
    async fn find_doctor_by_id(&self, id: i64) -> Result<Option<Doctor>> {
        let doctor = repositories::doctor::get_doctor_by_id(&self.pool, id).await?;
        Ok(doctor.map(Doctor::from))
    }

    async fn save_doctor(&self, doctor: NewDoctor) -> Result<Doctor> {
        let row = repositories::doctor::create_doctor(
            &self.pool,
            doctor.first_name.as_deref(),
            doctor.last_name.as_deref(),
            doctor.specialization.as_deref(),
        )
        .await?;
        Ok(row.into())
    }

    async fn find_slots_by_doctor(&self, doctor_id: i64) -> Result<Vec<Slot>> {
        let rows = repositories::slot::get_slots_by_doctor_id(&self.pool, doctor_id).await?;
        Ok(rows.into_iter().map(Slot::from).collect())
    }

    async fn save_slot(&self, slot: NewSlot) -> Result<Slot> {
        let row = repositories::slot::create_slot(
            &self.pool,
            slot.doctor_id,
            slot.day,
            slot.from_hour.as_deref(),
            slot.duration,
        )
        .await?;
        Ok(row.into())
    }
}
