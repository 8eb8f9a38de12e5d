//! Car model entity and DTOs.
//!
//! A model belongs to exactly one brand. [`CarModelDetails`] is the
//! response shape: the row joined with its brand name.

use carcatalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `car_models` table.
#[derive(Debug, Clone, FromRow)]
pub struct CarModel {
    pub id: DbId,
    pub brand_id: DbId,
    pub name: String,
    pub reference_price: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A model joined with its brand.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarModelDetails {
    pub id: DbId,
    #[serde(rename = "marcaId")]
    pub brand_id: DbId,
    #[serde(rename = "nomeMarca")]
    pub brand_name: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valorFipe")]
    pub reference_price: Option<f64>,
    #[serde(rename = "dataCriacao")]
    pub created_at: Timestamp,
    #[serde(rename = "dataAtualizacao")]
    pub updated_at: Timestamp,
}

/// DTO for creating a model under an existing brand.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCarModel {
    #[serde(rename = "marcaId")]
    pub brand_id: DbId,
    #[serde(rename = "nome")]
    #[validate(
        length(min = 2, max = 100),
        custom(function = "carcatalog_core::validation::validate_not_blank")
    )]
    pub name: String,
    #[serde(rename = "valorFipe")]
    #[validate(range(exclusive_min = 0.0))]
    pub reference_price: f64,
}

/// PUT replaces every mutable field and re-resolves the brand by id.
pub type UpdateCarModel = CreateCarModel;
