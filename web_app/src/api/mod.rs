//! # API Module
//!
//! Business operations of the Horse Index service. Each function takes
//! already validated domain values, runs the matching repository operation
//! and turns missing rows into [`ApiError::NotFound`].
//!
//! ## Modules
//!
//! - [`horse`] - horse profiles
//! - [`medical_record`] - medical history of a horse
//!
//! [`ApiError::NotFound`]: crate::rest::errors::ApiError::NotFound

pub mod horse;
pub mod medical_record;
