use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format of a slot's day.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: i64,
    pub doctor_id: i64,
    pub day: NaiveDate,
    pub from_hour: Option<String>,
    /// Opaque length of the slot; no unit is attached to it.
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSlot {
    pub doctor_id: i64,
    pub day: NaiveDate,
    pub from_hour: Option<String>,
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: i64,
    pub day: String,
    pub from_hour: Option<String>,
    pub duration: i64,
}

impl From<Slot> for SlotResponse {
    fn from(slot: Slot) -> Self {
        Self {
            id: slot.id,
            day: slot.day.format(DAY_FORMAT).to_string(),
            from_hour: slot.from_hour,
            duration: slot.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotResponse {
    pub id: i64,
}
