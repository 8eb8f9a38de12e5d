//! JSON shapes exchanged with the catalog backend.
//!
//! Field names follow the backend's camelCase wire format; timestamps are
//! kept as RFC 3339 strings parsed by chrono.

use carcatalog_core::types::{DbId, Timestamp, UnixSeconds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendCar {
    pub id: DbId,
    #[serde(rename = "modeloId")]
    pub model_id: DbId,
    #[serde(rename = "nomeModelo")]
    pub model_name: String,
    #[serde(rename = "marcaId")]
    pub brand_id: DbId,
    #[serde(rename = "nomeMarca")]
    pub brand_name: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "combustivel")]
    pub fuel: String,
    #[serde(rename = "numPortas")]
    pub doors: i32,
    #[serde(rename = "cor")]
    pub color: String,
    #[serde(rename = "valor")]
    pub price: f64,
    #[serde(rename = "timestampCadastro")]
    pub registered_at: UnixSeconds,
    #[serde(rename = "dataCriacao", default)]
    pub created_at: Option<Timestamp>,
    #[serde(rename = "dataAtualizacao", default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Brand {
    pub id: DbId,
    #[serde(rename = "nomeMarca")]
    pub name: String,
    #[serde(rename = "dataCriacao", default)]
    pub created_at: Option<Timestamp>,
    #[serde(rename = "dataAtualizacao", default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Model {
    pub id: DbId,
    #[serde(rename = "marcaId")]
    pub brand_id: DbId,
    #[serde(rename = "nomeMarca")]
    pub brand_name: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valorFipe", default)]
    pub reference_price: Option<f64>,
    #[serde(rename = "dataCriacao", default)]
    pub created_at: Option<Timestamp>,
    #[serde(rename = "dataAtualizacao", default)]
    pub updated_at: Option<Timestamp>,
}

/// Body of `POST /api/marcas` and `PUT /api/marcas/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct BrandPayload {
    #[serde(rename = "nomeMarca")]
    pub name: String,
}

/// Body of `POST /api/modelos` and `PUT /api/modelos/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelPayload {
    #[serde(rename = "marcaId")]
    pub brand_id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valorFipe")]
    pub reference_price: f64,
}

/// Body of `POST /api/carros` and `PUT /api/carros/{id}`.
///
/// The UI references models by name; `model_id` is only sent when known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarPayload {
    #[serde(rename = "modeloId", skip_serializing_if = "Option::is_none")]
    pub model_id: Option<DbId>,
    #[serde(rename = "nomeModelo")]
    pub model_name: String,
    #[serde(rename = "nomeMarca")]
    pub brand_name: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "combustivel")]
    pub fuel: String,
    #[serde(rename = "numPortas")]
    pub doors: i32,
    #[serde(rename = "cor")]
    pub color: String,
    #[serde(rename = "valor")]
    pub price: f64,
}

/// One entry of the legacy `/cars.json` listing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LegacyCar {
    pub id: DbId,
    pub timestamp_cadastro: UnixSeconds,
    pub modelo_id: DbId,
    pub ano: i32,
    pub combustivel: String,
    pub num_portas: i32,
    pub cor: String,
    pub nome_modelo: String,
    pub valor: i64,
    pub marca: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyCarList {
    pub cars: Vec<LegacyCar>,
}
