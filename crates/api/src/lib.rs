//! Car catalog API server library.
//!
//! Exposes config, state, error handling, services and routes so that
//! integration tests and the binary entrypoint share the same building
//! blocks.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod routes;
pub mod services;
pub mod state;
