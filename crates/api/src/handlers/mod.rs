//! Request handlers for the catalog entities.
//!
//! Each submodule extracts path, query and body, delegates to the matching
//! service in [`crate::services`] and maps errors via [`crate::error::AppError`].

pub mod brand;
pub mod car;
pub mod car_model;
