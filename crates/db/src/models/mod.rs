//! Row models and input DTOs.
//!
//! Rust fields use English names matching the table columns; the serde
//! renames keep the JSON wire names the catalog frontend already speaks.

pub mod brand;
pub mod car;
pub mod car_model;
