//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?nome=` lookup used by the brand and model search endpoints.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub nome: String,
}

/// Inclusive price bounds (`?min=&max=`).
#[derive(Debug, Deserialize)]
pub struct PriceRangeQuery {
    pub min: f64,
    pub max: f64,
}
