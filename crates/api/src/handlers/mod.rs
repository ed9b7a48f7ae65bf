pub mod doctor;
pub mod slot;
