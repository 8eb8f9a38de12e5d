//! Domain types shared by the car catalog server and client crates.

pub mod error;
pub mod fuel;
pub mod types;
pub mod validation;
