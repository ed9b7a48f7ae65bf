use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialization: Option<String>,
}

/// A doctor that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewDoctor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorResponse {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialization: Option<String>,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            first_name: doctor.first_name,
            last_name: doctor.last_name,
            specialization: doctor.specialization,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDoctorResponse {
    pub id: i64,
}
