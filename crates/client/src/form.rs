//! Raw car form input and its conversion into a backend payload.

use carcatalog_core::fuel::FuelType;
use carcatalog_core::types::DbId;
use carcatalog_core::validation::{check_doors, check_price, check_year};

use crate::brands::resolve_brand;
use crate::catalog::CatalogCar;
use crate::wire::CarPayload;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormError {
    /// Required fields left blank, in form order.
    #[error("Missing required fields: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Invalid {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarForm {
    pub model_name: String,
    pub brand: String,
    pub year: String,
    pub fuel: String,
    pub doors: String,
    pub color: String,
    pub price: String,
    /// Pins an existing model. When set, the backend ignores the model and
    /// brand names, so the edit form leaves it empty.
    pub model_id: Option<DbId>,
}

impl CarForm {
    /// Pre-fill the edit form from a stored car.
    pub fn from_car(car: &CatalogCar) -> Self {
        Self {
            model_name: car.model_name.clone(),
            brand: resolve_brand(car),
            year: car.year.to_string(),
            fuel: car.fuel.clone(),
            doors: car.doors.to_string(),
            color: car.color.clone(),
            price: car.price.to_string(),
            model_id: None,
        }
    }

    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("nome_modelo", self.model_name.as_str()),
            ("marca", self.brand.as_str()),
            ("ano", self.year.as_str()),
            ("combustivel", self.fuel.as_str()),
            ("num_portas", self.doors.as_str()),
            ("cor", self.color.as_str()),
            ("valor", self.price.as_str()),
        ]
    }

    /// Check that every required field is filled in.
    pub fn validate(&self) -> Result<(), FormError> {
        let missing: Vec<&'static str> = self
            .fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::Missing(missing))
        }
    }

    /// Validate and parse the form into the body sent to the backend.
    pub fn to_payload(&self) -> Result<CarPayload, FormError> {
        self.validate()?;

        let year: i32 = parse_number("ano", &self.year)?;
        check_year(year).map_err(|message| invalid("ano", message))?;

        let doors: i32 = parse_number("num_portas", &self.doors)?;
        check_doors(doors).map_err(|message| invalid("num_portas", message))?;

        let price: f64 = parse_number("valor", &self.price.replace(',', "."))?;
        check_price(price).map_err(|message| invalid("valor", message))?;

        let fuel = self
            .fuel
            .parse::<FuelType>()
            .map_err(|e| invalid("combustivel", e.to_string()))?;

        Ok(CarPayload {
            model_id: self.model_id,
            model_name: self.model_name.trim().to_string(),
            brand_name: self.brand.trim().to_string(),
            year,
            fuel: fuel.as_str().to_string(),
            doors,
            color: self.color.trim().to_string(),
            price,
        })
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, FormError> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(field, format!("'{}' is not a number", raw.trim())))
}

fn invalid(field: &'static str, message: String) -> FormError {
    FormError::Invalid { field, message }
}
