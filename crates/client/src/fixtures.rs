//! Static records of the "external API" source.
//!
//! Served alongside backend cars and never written to. Ids are below 1000,
//! where backend ids start, so the two sources never collide. The list is
//! kept as received, including the repeated id 3.

use carcatalog_core::types::{DbId, UnixSeconds};

/// One external record. The brand is only known by numeric code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalCar {
    pub id: DbId,
    pub registered_at: UnixSeconds,
    pub model_id: DbId,
    pub year: i32,
    pub fuel: &'static str,
    pub doors: i32,
    pub color: &'static str,
    pub model_name: &'static str,
    pub price: f64,
    pub brand_code: u32,
}

pub const EXTERNAL_CARS: &[ExternalCar] = &[
    ExternalCar {
        id: 55,
        registered_at: 1_696_549_488,
        model_id: 88,
        year: 2014,
        fuel: "FLEX",
        doors: 4,
        color: "BRANCA",
        model_name: "ETIOS",
        price: 36.0,
        brand_code: 1,
    },
    ExternalCar {
        id: 23,
        registered_at: 1_696_531_236,
        model_id: 77,
        year: 2014,
        fuel: "FLEX",
        doors: 4,
        color: "PRETO",
        model_name: "COROLLA",
        price: 120.0,
        brand_code: 1,
    },
    ExternalCar {
        id: 3,
        registered_at: 16_965_354_321,
        model_id: 79,
        year: 1993,
        fuel: "DIESEL",
        doors: 4,
        color: "AZUL",
        model_name: "HILLUX SW4",
        price: 47.5,
        brand_code: 1,
    },
    ExternalCar {
        id: 1,
        registered_at: 1_696_539_488,
        model_id: 12,
        year: 2015,
        fuel: "FLEX",
        doors: 4,
        color: "BEGE",
        model_name: "ONIX PLUS",
        price: 50.0,
        brand_code: 3,
    },
    ExternalCar {
        id: 2,
        registered_at: 1_696_531_234,
        model_id: 14,
        year: 2014,
        fuel: "FLEX",
        doors: 4,
        color: "AZUL",
        model_name: "JETTA",
        price: 49.0,
        brand_code: 2,
    },
    ExternalCar {
        id: 3,
        registered_at: 16_965_354_321,
        model_id: 79,
        year: 1993,
        fuel: "DIESEL",
        doors: 4,
        color: "AZUL",
        model_name: "HILLUX SW4",
        price: 47.5,
        brand_code: 1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_ids_stay_below_backend_range() {
        assert_eq!(EXTERNAL_CARS.len(), 6);
        assert!(EXTERNAL_CARS.iter().all(|c| c.id < 1000));
    }
}
