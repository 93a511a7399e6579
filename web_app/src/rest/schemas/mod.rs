//! # Request/response contracts
//!
//! Inbound payloads arrive as untyped JSON and are turned into validated
//! domain values here, before any repository call. Outbound read shapes are
//! built from stored entities.
//!
//! ## Modules
//!
//! - [`field`] - absent / null / value tri-state for partial updates
//! - [`horse`] - horse payloads and read shapes
//! - [`medical_record`] - medical record payloads and read shapes

pub mod field;
pub mod horse;
pub mod medical_record;

use super::errors::ApiError;
use serde::de::DeserializeOwned;

/// Deserializes a raw request body into a payload type. Malformed JSON is
/// reported the same way as shape, enum and date errors.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}

/// Same as [`parse_body`] for an already decoded JSON value.
pub fn parse_payload<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}

fn check_max_len(field: &str, value: &str, max_len: usize) -> Result<(), ApiError> {
    if value.chars().count() > max_len {
        return Err(ApiError::InvalidPayload(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

fn check_optional_max_len(
    field: &str,
    value: Option<&String>,
    max_len: usize,
) -> Result<(), ApiError> {
    value.map_or(Ok(()), |value| check_max_len(field, value, max_len))
}
