//! Client-side data layer for the car catalog.
//!
//! Wraps the REST API ([`api::CatalogApi`]), keeps a shared store of every
//! car the UI shows ([`store::CarStore`]), derives brand groupings and
//! filters ([`brands`]), validates and formats car data ([`form`],
//! [`format`]) and runs the create/edit/delete flows ([`manager`]).

pub mod api;
pub mod brands;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod form;
pub mod format;
pub mod manager;
pub mod retry;
pub mod store;
pub mod wire;
