use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slotbook_core::models::{doctor::Doctor, slot::Slot};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDoctor {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: i64,
    pub day: NaiveDate,
    pub from_hour: Option<String>,
    pub duration: i64,
    pub doctor_id: i64,
}

impl From<DbDoctor> for Doctor {
    fn from(row: DbDoctor) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            specialization: row.specialization,
        }
    }
}

impl From<DbSlot> for Slot {
    fn from(row: DbSlot) -> Self {
        Self {
            id: row.id,
            doctor_id: row.doctor_id,
            day: row.day,
            from_hour: row.from_hour,
            duration: row.duration,
        }
    }
}
