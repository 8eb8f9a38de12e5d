//! Brand resolution, grouping and filtering over [`CatalogCar`]s.

use crate::catalog::CatalogCar;

/// Bucket name for cars whose brand cannot be resolved.
pub const UNKNOWN_BRAND: &str = "Other";

/// Numeric brand codes used by the external source. Not a contract: codes
/// only ever appear on external records.
const BRAND_CODES: &[(u32, &str)] = &[
    (1, "Toyota"),
    (2, "Volkswagen"),
    (3, "Chevrolet"),
    (4, "Ford"),
    (5, "Honda"),
    (6, "Hyundai"),
    (7, "Fiat"),
    (8, "Renault"),
    (9, "Nissan"),
    (10, "BMW"),
    (11, "Mercedes-Benz"),
    (12, "Audi"),
];

pub fn brand_for_code(code: u32) -> Option<&'static str> {
    BRAND_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Brand shown for a car: the trimmed explicit name if non-blank, else the
/// code table entry, else [`UNKNOWN_BRAND`].
pub fn resolve_brand(car: &CatalogCar) -> String {
    if let Some(name) = car.brand_name.as_deref().map(str::trim) {
        if !name.is_empty() {
            return name.to_string();
        }
    }
    car.brand_code
        .and_then(brand_for_code)
        .unwrap_or(UNKNOWN_BRAND)
        .to_string()
}

/// URL-friendly id for a brand name: lowercase, whitespace runs as `-`.
pub fn brand_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrandBucket {
    pub id: String,
    pub name: String,
    pub cars: Vec<CatalogCar>,
}

impl BrandBucket {
    pub fn car_count(&self) -> usize {
        self.cars.len()
    }
}

/// Group cars by resolved brand, largest bucket first. Buckets of equal
/// size keep the order in which their brand was first seen.
pub fn group_by_brand(cars: &[CatalogCar]) -> Vec<BrandBucket> {
    let mut buckets: Vec<BrandBucket> = Vec::new();
    for car in cars {
        let name = resolve_brand(car);
        match buckets.iter_mut().find(|b| b.name == name) {
            Some(bucket) => bucket.cars.push(car.clone()),
            None => buckets.push(BrandBucket {
                id: brand_slug(&name),
                name,
                cars: vec![car.clone()],
            }),
        }
    }
    // `sort_by` is stable.
    buckets.sort_by(|a, b| b.car_count().cmp(&a.car_count()));
    buckets
}

/// Cars matching `brand` (case-insensitive equality on the resolved brand)
/// and `model` (case-insensitive substring). Blank filters match everything.
pub fn filter_cars(cars: &[CatalogCar], brand: &str, model: &str) -> Vec<CatalogCar> {
    let brand = brand.trim().to_lowercase();
    let model = model.trim().to_lowercase();
    cars.iter()
        .filter(|car| brand.is_empty() || resolve_brand(car).to_lowercase() == brand)
        .filter(|car| model.is_empty() || car.model_name.to_lowercase().contains(&model))
        .cloned()
        .collect()
}
