//! Composite product resolution
//!
//! A composite product is priced by assembling three independently priced
//! catalog rows: the base unit, a motor matched by extracted HP and phase,
//! and a transmission matched by power band and RPM sub-range. Resolution
//! never fails as a whole - each part reports its own status and prices a
//! miss as 0.

use serde::Serialize;

use super::band::Band;
use super::context::PricingContext;
use crate::catalog::hp::format_hp;
use crate::catalog::{CatalogIndex, CatalogRow, Phase};

/// Valid target RPM domain, enforced at the boundary.
pub const RPM_MIN: u32 = 301;
pub const RPM_MAX: u32 = 2600;

/// Disclaimer phrase stripped from base descriptions before the generated
/// configuration clause is appended.
const MOTORLESS_DISCLAIMER: &str = "NO INCLUYE MOTOR NI TRANSMISION";

/// An ephemeral composite-configuration request.
///
/// `rpm` is domain-validated (301-2600) at the CLI boundary; `hp` should
/// equal some indexed motor HP for the motor lookup to succeed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeRequest {
    pub hp: f64,
    pub phase: Phase,
    pub rpm: u32,
}

/// Motor resolution outcome. A missing motor is a hard block on committing
/// the composite to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotorStatus {
    Found,
    NotFound,
}

impl std::fmt::Display for MotorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotorStatus::Found => write!(f, "found"),
            MotorStatus::NotFound => write!(f, "not-found"),
        }
    }
}

/// Transmission resolution outcome. Both miss variants are soft warnings;
/// the composite may still be committed with the transmission priced 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransmissionStatus {
    Found,
    NotFound,
    UnsupportedBand,
}

impl std::fmt::Display for TransmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransmissionStatus::Found => write!(f, "found"),
            TransmissionStatus::NotFound => write!(f, "not-found"),
            TransmissionStatus::UnsupportedBand => write!(f, "unsupported-band"),
        }
    }
}

/// The priced, described outcome of one composite resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeResult {
    pub unit_sell: f64,
    pub unit_cost: f64,
    pub description: String,
    pub motor_status: MotorStatus,
    pub motor_sell: f64,
    pub motor_cost: f64,
    pub band: Option<Band>,
    pub transmission_status: TransmissionStatus,
    pub transmission_sell: f64,
    pub transmission_cost: f64,
}

impl CompositeResult {
    /// Every composite needs a motor; without one the line item must not
    /// be committed to the order.
    pub fn is_committable(&self) -> bool {
        self.motor_status == MotorStatus::Found
    }
}

/// Resolve a composite configuration against the catalog index.
///
/// A missing motor does not short-circuit the transmission lookup; both
/// statuses are always populated, and the description is generated whether
/// or not the parts resolved. Missing price columns contribute 0.
pub fn resolve(
    index: &CatalogIndex,
    base: &CatalogRow,
    request: &CompositeRequest,
    ctx: &PricingContext,
) -> CompositeResult {
    let (motor_status, motor_sell, motor_cost) = match index.find_motor(request.hp, request.phase)
    {
        Some(motor) => (
            MotorStatus::Found,
            ctx.sell_price(&motor.row),
            ctx.cost_price(&motor.row),
        ),
        None => (MotorStatus::NotFound, 0.0, 0.0),
    };

    let band = Band::for_hp(request.hp);
    let (transmission_status, transmission_sell, transmission_cost) = match band {
        None => (TransmissionStatus::UnsupportedBand, 0.0, 0.0),
        Some(band) => match index.find_transmission(band.category(), request.rpm) {
            Some(transmission) => (
                TransmissionStatus::Found,
                ctx.sell_price(&transmission.row),
                ctx.cost_price(&transmission.row),
            ),
            None => (TransmissionStatus::NotFound, 0.0, 0.0),
        },
    };

    CompositeResult {
        unit_sell: ctx.sell_price(base) + motor_sell + transmission_sell,
        unit_cost: ctx.cost_price(base) + motor_cost + transmission_cost,
        description: compose_description(&base.product, request),
        motor_status,
        motor_sell,
        motor_cost,
        band,
        transmission_status,
        transmission_sell,
        transmission_cost,
    }
}

/// Strip the motorless disclaimer and trailing period from the base text,
/// then append the clause naming the requested configuration verbatim.
fn compose_description(base: &str, request: &CompositeRequest) -> String {
    let cleaned = base.replace(MOTORLESS_DISCLAIMER, "");
    let cleaned = cleaned.trim().trim_end_matches('.').trim_end();

    format!(
        "{}. INCLUYE MOTOR {} HP {} Y TRANSMISIÓN PARA {} RPM.",
        cleaned,
        format_hp(request.hp),
        request.phase,
        request.rpm
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceColumn;

    fn row(category: &str, model: &str, product: &str, list: f64, factory: f64) -> CatalogRow {
        CatalogRow {
            category: category.to_string(),
            model: model.to_string(),
            product: product.to_string(),
            currency: "MXN".to_string(),
            list_price: Some(list),
            contractor_price: None,
            factory_price: Some(factory),
            public_price: None,
        }
    }

    fn fixture_index() -> CatalogIndex {
        CatalogIndex::build(vec![
            row(
                "MULTICURVA",
                "MC-18",
                "EXTRACTOR MULTICURVA 18 NO INCLUYE MOTOR NI TRANSMISION.",
                1000.0,
                700.0,
            ),
            row("TRIFASICO", "MT-3", "MOTOR 3 HP TRIFASICO", 500.0, 350.0),
            row("TRIFASICO", "MT-6", "MOTOR 6 HP TRIFASICO", 800.0, 600.0),
            row("3-5HP", "TR-35A", "301 a 2000", 300.0, 210.0),
        ])
    }

    fn base_row(index: &CatalogIndex) -> CatalogRow {
        index.find("MULTICURVA", "MC-18").unwrap().clone()
    }

    fn ctx() -> PricingContext {
        PricingContext::new(PriceColumn::Lista)
    }

    #[test]
    fn test_resolve_motor_and_transmission_found() {
        let index = fixture_index();
        let base = base_row(&index);
        let request = CompositeRequest {
            hp: 3.0,
            phase: Phase::Trifasico,
            rpm: 1000,
        };

        let result = resolve(&index, &base, &request, &ctx());

        assert_eq!(result.motor_status, MotorStatus::Found);
        assert_eq!(result.transmission_status, TransmissionStatus::Found);
        assert_eq!(result.unit_sell, 1800.0);
        assert_eq!(result.unit_cost, 1260.0);
        assert!(result.is_committable());
    }

    #[test]
    fn test_resolve_missing_motor_does_not_short_circuit() {
        let index = fixture_index();
        let base = base_row(&index);
        let request = CompositeRequest {
            hp: 3.0,
            phase: Phase::Monofasico,
            rpm: 1000,
        };

        let result = resolve(&index, &base, &request, &ctx());

        assert_eq!(result.motor_status, MotorStatus::NotFound);
        assert_eq!(result.motor_sell, 0.0);
        // Transmission resolution proceeds unaffected
        assert_eq!(result.transmission_status, TransmissionStatus::Found);
        assert_eq!(result.unit_sell, 1300.0);
        assert!(!result.is_committable());
    }

    #[test]
    fn test_resolve_unsupported_band() {
        let index = fixture_index();
        let base = base_row(&index);
        let request = CompositeRequest {
            hp: 6.0,
            phase: Phase::Trifasico,
            rpm: 1000,
        };

        let result = resolve(&index, &base, &request, &ctx());

        assert_eq!(result.motor_status, MotorStatus::Found);
        assert_eq!(result.band, None);
        assert_eq!(
            result.transmission_status,
            TransmissionStatus::UnsupportedBand
        );
        assert_eq!(result.unit_sell, 1800.0); // base 1000 + motor 800
        assert!(result.is_committable());
    }

    #[test]
    fn test_resolve_rpm_outside_every_range() {
        let index = fixture_index();
        let base = base_row(&index);
        let request = CompositeRequest {
            hp: 3.0,
            phase: Phase::Trifasico,
            rpm: 2500,
        };

        let result = resolve(&index, &base, &request, &ctx());

        assert_eq!(result.band, Some(Band::MidLow));
        assert_eq!(result.transmission_status, TransmissionStatus::NotFound);
        assert_eq!(result.transmission_sell, 0.0);
        assert_eq!(result.unit_sell, 1500.0);
        assert!(result.is_committable());
    }

    #[test]
    fn test_description_strips_disclaimer_and_appends_clause() {
        let index = fixture_index();
        let base = base_row(&index);
        let request = CompositeRequest {
            hp: 3.0,
            phase: Phase::Trifasico,
            rpm: 1000,
        };

        let result = resolve(&index, &base, &request, &ctx());

        assert_eq!(
            result.description,
            "EXTRACTOR MULTICURVA 18. INCLUYE MOTOR 3 HP TRIFASICO Y TRANSMISIÓN PARA 1000 RPM."
        );
    }

    #[test]
    fn test_description_generated_even_when_parts_missing() {
        let index = fixture_index();
        let base = base_row(&index);
        let request = CompositeRequest {
            hp: 3.0,
            phase: Phase::Monofasico,
            rpm: 1000,
        };

        let result = resolve(&index, &base, &request, &ctx());

        assert!(result
            .description
            .contains("INCLUYE MOTOR 3 HP MONOFASICO Y TRANSMISIÓN PARA 1000 RPM."));
    }

    #[test]
    fn test_fractional_hp_renders_without_trailing_zeros() {
        let mut rows = vec![
            row("MULTICURVA", "MC-8", "EXTRACTOR MULTICURVA 8", 400.0, 280.0),
            row("MONOFASICO", "MM-05", "MOTOR 1/2 HP MONOFASICO", 200.0, 150.0),
        ];
        rows.push(row("0.25-2HP", "TR-A", "301 a 1800", 100.0, 70.0));
        let index = CatalogIndex::build(rows);
        let base = index.find("MULTICURVA", "MC-8").unwrap().clone();
        let request = CompositeRequest {
            hp: 0.5,
            phase: Phase::Monofasico,
            rpm: 900,
        };

        let result = resolve(&index, &base, &request, &ctx());

        assert!(result.description.contains("INCLUYE MOTOR 0.5 HP MONOFASICO"));
        assert_eq!(result.unit_sell, 700.0);
    }
}
