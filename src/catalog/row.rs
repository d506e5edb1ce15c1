//! Catalog row and price-column types

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One product/component record from the catalog.
///
/// Within a (category, model) pair the first row in catalog order is
/// authoritative; duplicate pairs are a catalog-maintenance concern, not an
/// error here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Product category (trimmed)
    pub category: String,

    /// Model designation (trimmed)
    pub model: String,

    /// Free-text description; motor rows encode an HP value, transmission
    /// rows encode an RPM range
    pub product: String,

    /// Currency code, e.g. "MXN" or "USD"
    pub currency: String,

    /// "Precios de Lista"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,

    /// "Precio Contratista sin flete"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_price: Option<f64>,

    /// "Precio Fabrica" - always the cost column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory_price: Option<f64>,

    /// "Precio Publico" - present only in some catalog versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_price: Option<f64>,
}

impl CatalogRow {
    /// Look up one of the named price columns.
    pub fn price(&self, column: PriceColumn) -> Option<f64> {
        match column {
            PriceColumn::Lista => self.list_price,
            PriceColumn::Contratista => self.contractor_price,
            PriceColumn::Fabrica => self.factory_price,
            PriceColumn::Publico => self.public_price,
        }
    }
}

/// A named price column on a catalog row.
///
/// One of these is selected per session as the sell column; cost always
/// comes from [`PriceColumn::Fabrica`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceColumn {
    /// List price ("Publico en general" tier)
    #[default]
    Lista,
    /// Contractor price without freight ("Cliente Top" tier)
    Contratista,
    /// Factory price (cost)
    Fabrica,
    /// Public price (present only in some catalog versions)
    Publico,
}

impl PriceColumn {
    /// Human-readable column label, as it appears in catalog headers.
    pub fn label(&self) -> &'static str {
        match self {
            PriceColumn::Lista => "Precios de Lista",
            PriceColumn::Contratista => "Precio Contratista sin flete",
            PriceColumn::Fabrica => "Precio Fabrica",
            PriceColumn::Publico => "Precio Publico",
        }
    }
}

impl std::fmt::Display for PriceColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceColumn::Lista => write!(f, "lista"),
            PriceColumn::Contratista => write!(f, "contratista"),
            PriceColumn::Fabrica => write!(f, "fabrica"),
            PriceColumn::Publico => write!(f, "publico"),
        }
    }
}

impl std::str::FromStr for PriceColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lista" => Ok(PriceColumn::Lista),
            "contratista" => Ok(PriceColumn::Contratista),
            "fabrica" => Ok(PriceColumn::Fabrica),
            "publico" => Ok(PriceColumn::Publico),
            _ => Err(format!(
                "Invalid price list: {}. Use lista, contratista, fabrica, or publico",
                s
            )),
        }
    }
}

/// Motor phase, matching the two reserved motor categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Monofasico,
    Trifasico,
}

impl Phase {
    /// The catalog category name motors of this phase are filed under.
    pub fn category(&self) -> &'static str {
        match self {
            Phase::Monofasico => super::SINGLE_PHASE,
            Phase::Trifasico => super::THREE_PHASE,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

impl std::str::FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MONOFASICO" => Ok(Phase::Monofasico),
            "TRIFASICO" => Ok(Phase::Trifasico),
            _ => Err(format!(
                "Invalid phase: {}. Use monofasico or trifasico",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> CatalogRow {
        CatalogRow {
            category: "AXIAL".to_string(),
            model: "AX-10".to_string(),
            product: "VENTILADOR AXIAL 10".to_string(),
            currency: "MXN".to_string(),
            list_price: Some(1000.0),
            contractor_price: Some(900.0),
            factory_price: Some(700.0),
            public_price: None,
        }
    }

    #[test]
    fn test_price_column_lookup() {
        let row = sample_row();
        assert_eq!(row.price(PriceColumn::Lista), Some(1000.0));
        assert_eq!(row.price(PriceColumn::Contratista), Some(900.0));
        assert_eq!(row.price(PriceColumn::Fabrica), Some(700.0));
        assert_eq!(row.price(PriceColumn::Publico), None);
    }

    #[test]
    fn test_price_column_parse() {
        assert_eq!("lista".parse::<PriceColumn>(), Ok(PriceColumn::Lista));
        assert_eq!("FABRICA".parse::<PriceColumn>(), Ok(PriceColumn::Fabrica));
        assert!("wholesale".parse::<PriceColumn>().is_err());
    }

    #[test]
    fn test_phase_category_names() {
        assert_eq!(Phase::Monofasico.category(), "MONOFASICO");
        assert_eq!(Phase::Trifasico.category(), "TRIFASICO");
        assert_eq!(Phase::Trifasico.to_string(), "TRIFASICO");
    }

    #[test]
    fn test_phase_parse_case_insensitive() {
        assert_eq!("monofasico".parse::<Phase>(), Ok(Phase::Monofasico));
        assert_eq!("Trifasico".parse::<Phase>(), Ok(Phase::Trifasico));
        assert!("bifasico".parse::<Phase>().is_err());
    }

    #[test]
    fn test_row_roundtrip() {
        let row = sample_row();
        let yaml = serde_yml::to_string(&row).unwrap();
        let parsed: CatalogRow = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(row, parsed);
        // Absent price columns stay absent rather than serializing as null
        assert!(!yaml.contains("public_price"));
    }
}
