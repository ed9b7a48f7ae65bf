/// Mapping of domain errors to HTTP responses
pub mod error_handling;
/// Query and body parameter extraction
pub mod fields;
