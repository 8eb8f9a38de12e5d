//! Fuel type enumeration.
//!
//! Cars store their fuel as an uppercase string (`FLEX`, `DIESEL`, ...).
//! Input is accepted case-insensitively and normalized through [`FuelType`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    Flex,
    Gasolina,
    Diesel,
    Eletrico,
    Hibrido,
    Etanol,
    Gnv,
}

impl FuelType {
    pub const ALL: [FuelType; 7] = [
        FuelType::Flex,
        FuelType::Gasolina,
        FuelType::Diesel,
        FuelType::Eletrico,
        FuelType::Hibrido,
        FuelType::Etanol,
        FuelType::Gnv,
    ];

    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Flex => "FLEX",
            FuelType::Gasolina => "GASOLINA",
            FuelType::Diesel => "DIESEL",
            FuelType::Eletrico => "ELETRICO",
            FuelType::Hibrido => "HIBRIDO",
            FuelType::Etanol => "ETANOL",
            FuelType::Gnv => "GNV",
        }
    }

    /// Human-readable label shown in the catalog UI.
    pub fn label(self) -> &'static str {
        match self {
            FuelType::Flex => "Flex",
            FuelType::Gasolina => "Gasolina",
            FuelType::Diesel => "Diesel",
            FuelType::Eletrico => "Elétrico",
            FuelType::Hibrido => "Híbrido",
            FuelType::Etanol => "Etanol",
            FuelType::Gnv => "GNV",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid fuel '{0}'. Must be one of: FLEX, GASOLINA, DIESEL, ELETRICO, HIBRIDO, ETANOL, GNV")]
pub struct ParseFuelError(pub String);

impl FromStr for FuelType {
    type Err = ParseFuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == upper)
            .ok_or_else(|| ParseFuelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("flex".parse::<FuelType>(), Ok(FuelType::Flex));
        assert_eq!(" Diesel ".parse::<FuelType>(), Ok(FuelType::Diesel));
        assert_eq!("GNV".parse::<FuelType>(), Ok(FuelType::Gnv));
    }

    #[test]
    fn rejects_unknown_fuel() {
        assert_matches!("kerosene".parse::<FuelType>(), Err(ParseFuelError(s)) if s == "kerosene");
        assert!("".parse::<FuelType>().is_err());
    }

    #[test]
    fn stored_form_round_trips() {
        for fuel in FuelType::ALL {
            assert_eq!(fuel.as_str().parse::<FuelType>(), Ok(fuel));
        }
    }

    #[test]
    fn labels_keep_accents() {
        assert_eq!(FuelType::Eletrico.label(), "Elétrico");
        assert_eq!(FuelType::Hibrido.label(), "Híbrido");
    }

    #[test]
    fn serializes_uppercase() {
        let json = serde_json::to_string(&FuelType::Etanol).unwrap();
        assert_eq!(json, "\"ETANOL\"");
    }
}
