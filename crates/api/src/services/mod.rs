//! Catalog business rules.
//!
//! Services validate input, enforce uniqueness and parent references, and
//! run multi-statement writes in a transaction. Handlers stay thin and only
//! translate HTTP to service calls.

pub mod brand;
pub mod car;
pub mod car_model;
