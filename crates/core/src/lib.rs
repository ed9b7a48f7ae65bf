//! Domain types shared by the storage adapters and the HTTP layer.

pub mod coerce;
pub mod errors;
pub mod models;
pub mod store;
