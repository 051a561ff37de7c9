//! Core domain types and logic.

pub mod record;
pub mod coercion;
pub mod pivot;
pub mod row_processor;
pub mod batch;
pub mod layout;
pub mod config_validation;
pub mod error;
