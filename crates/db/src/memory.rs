//! In-memory [`ClinicStore`] used by tests and local runs without PostgreSQL.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use eyre::{eyre, Result};
use slotbook_core::{
    models::{
        doctor::{Doctor, NewDoctor},
        slot::{NewSlot, Slot},
    },
    store::ClinicStore,
};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct Tables {
    doctors: BTreeMap<i64, Doctor>,
    slots: BTreeMap<i64, Slot>,
    last_doctor_id: i64,
    last_slot_id: i64,
}

/// Behaves like the relational store: ids are assigned from 1 upwards and a
/// slot can only reference an existing doctor.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn doctor_count(&self) -> usize {
        self.tables.read().await.doctors.len()
    }

    pub async fn slot_count(&self) -> usize {
        self.tables.read().await.slots.len()
    }
}

#[async_trait]
impl ClinicStore for InMemoryStore {
    async fn find_doctor_by_id(&self, id: i64) -> Result<Option<Doctor>> {
        Ok(self.tables.read().await.doctors.get(&id).cloned())
    }

    async fn save_doctor(&self, doctor: NewDoctor) -> Result<Doctor> {
        let mut tables = self.tables.write().await;
        tables.last_doctor_id += 1;

        let doctor = Doctor {
            id: tables.last_doctor_id,
            first_name: doctor.first_name,
            last_name: doctor.last_name,
            specialization: doctor.specialization,
        };
        tables.doctors.insert(doctor.id, doctor.clone());

        debug!("Doctor stored in memory: id={}", doctor.id);
        Ok(doctor)
    }

    async fn find_slots_by_doctor(&self, doctor_id: i64) -> Result<Vec<Slot>> {
        let tables = self.tables.read().await;
        Ok(tables
            .slots
            .values()
            .filter(|slot| slot.doctor_id == doctor_id)
            .cloned()
            .collect())
    }

    async fn save_slot(&self, slot: NewSlot) -> Result<Slot> {
        let mut tables = self.tables.write().await;
        if !tables.doctors.contains_key(&slot.doctor_id) {
            return Err(eyre!(
                "foreign key violation: doctor {} does not exist",
                slot.doctor_id
            ));
        }
        tables.last_slot_id += 1;

        let slot = Slot {
            id: tables.last_slot_id,
            doctor_id: slot.doctor_id,
            day: slot.day,
            from_hour: slot.from_hour,
            duration: slot.duration,
        };
        tables.slots.insert(slot.id, slot.clone());

        debug!("Slot stored in memory: id={}, doctor_id={}", slot.id, slot.doctor_id);
        Ok(slot)
    }
}
