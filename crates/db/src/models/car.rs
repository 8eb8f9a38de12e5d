//! Car entity model and DTOs.
//!
//! Cars are always returned denormalized as [`CarDetails`] (model and
//! brand names resolved). [`FormattedCar`] is the legacy `cars.json`
//! listing shape.

use carcatalog_core::types::{DbId, Timestamp, UnixSeconds};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `cars` table.
#[derive(Debug, Clone, FromRow)]
pub struct Car {
    pub id: DbId,
    pub model_id: DbId,
    pub registered_at: UnixSeconds,
    pub year: i32,
    pub fuel: String,
    pub doors: i32,
    pub color: String,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A car joined with its model and brand.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarDetails {
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
    #[serde(rename = "dataCriacao")]
    pub created_at: Timestamp,
    #[serde(rename = "dataAtualizacao")]
    pub updated_at: Timestamp,
}

/// Request body for creating or replacing a car.
///
/// The model is referenced by `modeloId`. When that is absent, the pair
/// `nomeModelo` + `nomeMarca` is resolved instead, creating the brand and
/// model if they do not exist yet.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCar {
    #[serde(rename = "modeloId", default)]
    pub model_id: Option<DbId>,
    #[serde(rename = "nomeModelo", default)]
    #[validate(length(min = 2, max = 100))]
    pub model_name: Option<String>,
    #[serde(rename = "nomeMarca", default)]
    #[validate(length(min = 2, max = 100))]
    pub brand_name: Option<String>,
    #[serde(rename = "ano")]
    #[validate(range(min = 1900, max = 2030))]
    pub year: i32,
    #[serde(rename = "combustivel")]
    #[validate(custom(function = "carcatalog_core::validation::validate_fuel"))]
    pub fuel: String,
    #[serde(rename = "numPortas")]
    #[validate(range(min = 2, max = 5))]
    pub doors: i32,
    #[serde(rename = "cor")]
    #[validate(custom(function = "carcatalog_core::validation::validate_not_blank"))]
    pub color: String,
    #[serde(rename = "valor")]
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[serde(rename = "timestampCadastro", default)]
    pub registered_at: Option<UnixSeconds>,
}

/// PUT replaces every mutable field and re-resolves the model.
pub type UpdateCar = CreateCar;

/// Fully resolved column values for an insert or update.
#[derive(Debug, Clone)]
pub struct CarValues {
    pub model_id: DbId,
    pub registered_at: UnixSeconds,
    pub year: i32,
    pub fuel: String,
    pub doors: i32,
    pub color: String,
    pub price: f64,
}

/// One entry of the legacy `cars.json` listing.
#[derive(Debug, Clone, Serialize)]
pub struct FormattedCar {
    pub id: DbId,
    pub timestamp_cadastro: UnixSeconds,
    pub modelo_id: DbId,
    pub ano: i32,
    pub combustivel: String,
    pub num_portas: i32,
    pub cor: String,
    pub nome_modelo: String,
    /// Whole currency units; the legacy format drops the fraction.
    pub valor: i64,
    pub marca: String,
}

impl From<CarDetails> for FormattedCar {
    fn from(car: CarDetails) -> Self {
        Self {
            id: car.id,
            timestamp_cadastro: car.registered_at,
            modelo_id: car.model_id,
            ano: car.year,
            combustivel: car.fuel,
            num_portas: car.doors,
            cor: car.color,
            nome_modelo: car.model_name,
            valor: car.price.trunc() as i64,
            marca: car.brand_name,
        }
    }
}

/// Envelope of the legacy listing: `{ "cars": [...] }`.
#[derive(Debug, Serialize)]
pub struct FormattedCarList {
    pub cars: Vec<FormattedCar>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn details(price: f64) -> CarDetails {
        let now = Utc::now();
        CarDetails {
            id: 1000,
            model_id: 12,
            model_name: "ONIX PLUS".into(),
            brand_id: 3,
            brand_name: "Chevrolet".into(),
            year: 2015,
            fuel: "FLEX".into(),
            doors: 4,
            color: "BEGE".into(),
            price,
            registered_at: 1_696_539_488,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn formatted_car_truncates_price() {
        let formatted = FormattedCar::from(details(50_999.99));
        assert_eq!(formatted.valor, 50_999);
        assert_eq!(formatted.marca, "Chevrolet");
        assert_eq!(formatted.modelo_id, 12);
    }

    #[test]
    fn details_serialize_with_wire_names() {
        let json = serde_json::to_value(details(50.0)).unwrap();
        assert_eq!(json["nomeModelo"], "ONIX PLUS");
        assert_eq!(json["nomeMarca"], "Chevrolet");
        assert_eq!(json["numPortas"], 4);
        assert_eq!(json["timestampCadastro"], 1_696_539_488);
        assert!(json["dataCriacao"].is_string());
    }

    #[test]
    fn create_car_rejects_out_of_range_fields() {
        let input: CreateCar = serde_json::from_value(serde_json::json!({
            "modeloId": 1,
            "ano": 1800,
            "combustivel": "STEAM",
            "numPortas": 9,
            "cor": " ",
            "valor": 0.0
        }))
        .unwrap();
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["year", "fuel", "doors", "color", "price"] {
            assert!(fields.contains_key(field), "expected error on {field}");
        }
    }

    #[test]
    fn create_car_accepts_names_without_model_id() {
        let input: CreateCar = serde_json::from_value(serde_json::json!({
            "nomeModelo": "Corolla",
            "nomeMarca": "Toyota",
            "ano": 2020,
            "combustivel": "flex",
            "numPortas": 4,
            "cor": "PRETO",
            "valor": 120000.0
        }))
        .unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.model_id, None);
        assert_eq!(input.registered_at, None);
    }
}
