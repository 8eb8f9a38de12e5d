//! The unified car record the UI works with.

use carcatalog_core::types::{DbId, UnixSeconds};

use crate::fixtures::ExternalCar;
use crate::wire::BackendCar;

/// Where a [`CatalogCar`] came from. Only backend records are mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Backend,
    External,
}

impl Origin {
    pub fn as_str(self) -> &'static str {
        match self {
            Origin::Backend => "backend",
            Origin::External => "api_externa",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCar {
    pub id: DbId,
    pub origin: Origin,
    pub model_name: String,
    /// Explicit brand name; backend records always carry one.
    pub brand_name: Option<String>,
    /// Numeric brand code; external records only.
    pub brand_code: Option<u32>,
    pub year: i32,
    pub fuel: String,
    pub doors: i32,
    pub color: String,
    pub price: f64,
    pub registered_at: UnixSeconds,
    pub model_id: Option<DbId>,
}

impl CatalogCar {
    pub fn is_backend(&self) -> bool {
        self.origin == Origin::Backend
    }
}

impl From<BackendCar> for CatalogCar {
    fn from(car: BackendCar) -> Self {
        Self {
            id: car.id,
            origin: Origin::Backend,
            model_name: car.model_name,
            brand_name: Some(car.brand_name),
            brand_code: None,
            year: car.year,
            fuel: car.fuel,
            doors: car.doors,
            color: car.color,
            price: car.price,
            registered_at: car.registered_at,
            model_id: Some(car.model_id),
        }
    }
}

impl From<&ExternalCar> for CatalogCar {
    fn from(car: &ExternalCar) -> Self {
        Self {
            id: car.id,
            origin: Origin::External,
            model_name: car.model_name.to_string(),
            brand_name: None,
            brand_code: Some(car.brand_code),
            year: car.year,
            fuel: car.fuel.to_string(),
            doors: car.doors,
            color: car.color.to_string(),
            price: car.price,
            registered_at: car.registered_at,
            model_id: Some(car.model_id),
        }
    }
}
