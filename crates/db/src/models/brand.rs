//! Brand entity model and DTOs.

use carcatalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A brand row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    #[serde(rename = "nomeMarca")]
    pub name: String,
    #[serde(rename = "dataCriacao")]
    pub created_at: Timestamp,
    #[serde(rename = "dataAtualizacao")]
    pub updated_at: Timestamp,
}

/// DTO for creating a brand.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBrand {
    #[serde(rename = "nomeMarca")]
    #[validate(
        length(min = 2, max = 100),
        custom(function = "carcatalog_core::validation::validate_not_blank")
    )]
    pub name: String,
}

/// PUT replaces every mutable field, so the update shape matches create.
pub type UpdateBrand = CreateBrand;
