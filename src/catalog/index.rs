//! Indexed views over the flat catalog
//!
//! [`CatalogIndex::build`] partitions rows by category membership into three
//! immutable views: standalone products, motor components (annotated with
//! extracted HP), and transmission components (annotated with a parsed RPM
//! range). The views are derived wholesale from the input rows; a catalog
//! reload rebuilds the whole index.

use serde::Serialize;

use super::hp::extract_hp;
use super::row::{CatalogRow, Phase};
use super::rpm::RpmRange;
use super::{LEGACY_MOTOR, SINGLE_PHASE, THREE_PHASE, TRANSMISSION_BANDS};

/// A motor-category row annotated with its extracted horsepower.
///
/// `hp` is 0.0 when extraction failed; real catalog HPs are > 0, so such
/// rows are visible in the view but never match a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotorComponent {
    pub hp: f64,
    pub row: CatalogRow,
}

/// A transmission-band row annotated with its parsed RPM range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransmissionComponent {
    pub rpm_range: RpmRange,
    pub row: CatalogRow,
}

/// Derived, read-only views over one catalog load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogIndex {
    standalone: Vec<CatalogRow>,
    motors: Vec<MotorComponent>,
    transmissions: Vec<TransmissionComponent>,
}

impl CatalogIndex {
    /// Partition catalog rows into the three views, preserving catalog
    /// order within each. Deterministic and idempotent for a given input.
    pub fn build(rows: Vec<CatalogRow>) -> Self {
        let mut index = CatalogIndex::default();

        for row in rows {
            if row.category == SINGLE_PHASE || row.category == THREE_PHASE {
                index.motors.push(MotorComponent {
                    hp: extract_hp(&row.product),
                    row,
                });
            } else if TRANSMISSION_BANDS.contains(&row.category.as_str()) {
                // Rows whose text does not parse to a range are dropped
                // from the view
                if let Ok(rpm_range) = RpmRange::parse(&row.product) {
                    index.transmissions.push(TransmissionComponent { rpm_range, row });
                }
            } else {
                index.standalone.push(row);
            }
        }
        index
    }

    pub fn is_empty(&self) -> bool {
        self.standalone.is_empty() && self.motors.is_empty() && self.transmissions.is_empty()
    }

    pub fn standalone(&self) -> &[CatalogRow] {
        &self.standalone
    }

    pub fn motors(&self) -> &[MotorComponent] {
        &self.motors
    }

    pub fn transmissions(&self) -> &[TransmissionComponent] {
        &self.transmissions
    }

    /// Sorted unique categories open to browsing. The legacy "MOTOR"
    /// category is hidden here but still resolvable via [`Self::find`].
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .standalone
            .iter()
            .map(|r| r.category.as_str())
            .filter(|c| *c != LEGACY_MOTOR)
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Sorted unique model names within a category.
    pub fn models(&self, category: &str) -> Vec<&str> {
        let mut models: Vec<&str> = self
            .standalone
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.model.as_str())
            .collect();
        models.sort_unstable();
        models.dedup();
        models
    }

    /// The authoritative row for a (category, model) pair. Duplicate pairs
    /// resolve to the first row in catalog order.
    pub fn find(&self, category: &str, model: &str) -> Option<&CatalogRow> {
        self.standalone
            .iter()
            .find(|r| r.category == category && r.model == model)
    }

    /// Sorted unique motor HP values with valid extractions.
    pub fn motor_hps(&self) -> Vec<f64> {
        let mut hps: Vec<f64> = self
            .motors
            .iter()
            .map(|m| m.hp)
            .filter(|hp| *hp > 0.0)
            .collect();
        hps.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        hps.dedup();
        hps
    }

    /// Exact equality on the extracted HP, no tolerance. Duplicate HP/phase
    /// combinations resolve to the first row in catalog order. The 0.0
    /// extraction sentinel is never a valid key.
    pub fn find_motor(&self, hp: f64, phase: Phase) -> Option<&MotorComponent> {
        self.motors
            .iter()
            .find(|m| m.hp > 0.0 && m.hp == hp && m.row.category == phase.category())
    }

    /// First transmission in catalog order whose category matches the band
    /// and whose RPM range contains the target. Overlapping ranges within a
    /// band resolve by catalog order.
    pub fn find_transmission(&self, band_category: &str, rpm: u32) -> Option<&TransmissionComponent> {
        self.transmissions
            .iter()
            .find(|t| t.row.category == band_category && t.rpm_range.contains(rpm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, model: &str, product: &str) -> CatalogRow {
        CatalogRow {
            category: category.to_string(),
            model: model.to_string(),
            product: product.to_string(),
            currency: "MXN".to_string(),
            list_price: Some(100.0),
            contractor_price: None,
            factory_price: Some(70.0),
            public_price: None,
        }
    }

    fn sample_rows() -> Vec<CatalogRow> {
        vec![
            row("MULTICURVA", "MC-18", "EXTRACTOR MULTICURVA 18"),
            row("AXIAL", "AX-10", "VENTILADOR AXIAL 10"),
            row("TRIFASICO", "MT-3", "MOTOR 3 HP TRIFASICO"),
            row("MONOFASICO", "MM-05", "MOTOR 1/2 HP MONOFASICO"),
            row("MONOFASICO", "MM-X", "MOTOR SIN DATOS"),
            row("3-5HP", "TR-35A", "301 a 2000"),
            row("3-5HP", "TR-35B", "BAJA VELOCIDAD"),
            row("MOTOR", "LEG-1", "MOTOR VIEJO 2 HP"),
        ]
    }

    #[test]
    fn test_build_partitions_rows() {
        let index = CatalogIndex::build(sample_rows());

        assert_eq!(index.standalone().len(), 3); // MULTICURVA, AXIAL, MOTOR
        assert_eq!(index.motors().len(), 3);
        // The unparseable transmission row is dropped
        assert_eq!(index.transmissions().len(), 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = CatalogIndex::build(sample_rows());
        let second = CatalogIndex::build(sample_rows());
        assert_eq!(first, second);
    }

    #[test]
    fn test_motor_hp_extraction_with_sentinel() {
        let index = CatalogIndex::build(sample_rows());

        assert_eq!(index.motors()[0].hp, 3.0);
        assert_eq!(index.motors()[1].hp, 0.5);
        // No HP marker in the text: sentinel 0, excluded from motor_hps
        assert_eq!(index.motors()[2].hp, 0.0);
        assert_eq!(index.motor_hps(), vec![0.5, 3.0]);
    }

    #[test]
    fn test_categories_hide_reserved_names() {
        let index = CatalogIndex::build(sample_rows());
        assert_eq!(index.categories(), vec!["AXIAL", "MULTICURVA"]);
    }

    #[test]
    fn test_models_sorted_unique() {
        let mut rows = sample_rows();
        rows.push(row("AXIAL", "AX-02", "VENTILADOR AXIAL 2"));
        rows.push(row("AXIAL", "AX-10", "DUPLICATE ROW"));
        let index = CatalogIndex::build(rows);

        assert_eq!(index.models("AXIAL"), vec!["AX-02", "AX-10"]);
    }

    #[test]
    fn test_find_first_match_wins() {
        let mut rows = sample_rows();
        let mut duplicate = row("AXIAL", "AX-10", "SECOND AX-10");
        duplicate.list_price = Some(999.0);
        rows.push(duplicate);
        let index = CatalogIndex::build(rows);

        let found = index.find("AXIAL", "AX-10").unwrap();
        assert_eq!(found.product, "VENTILADOR AXIAL 10");
    }

    #[test]
    fn test_find_motor_exact_hp_and_phase() {
        let index = CatalogIndex::build(sample_rows());

        assert!(index.find_motor(3.0, Phase::Trifasico).is_some());
        assert!(index.find_motor(3.0, Phase::Monofasico).is_none());
        assert!(index.find_motor(0.5, Phase::Monofasico).is_some());
        // The extraction sentinel must never resolve, even though a
        // sentinel row exists in the view
        assert!(index.find_motor(0.0, Phase::Monofasico).is_none());
    }

    #[test]
    fn test_find_transmission_band_and_rpm() {
        let index = CatalogIndex::build(sample_rows());

        assert!(index.find_transmission("3-5HP", 1000).is_some());
        assert!(index.find_transmission("3-5HP", 2500).is_none());
        assert!(index.find_transmission("0.25-2HP", 1000).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let index = CatalogIndex::build(Vec::new());
        assert!(index.is_empty());
        assert!(index.categories().is_empty());
        assert!(index.find("AXIAL", "AX-10").is_none());
    }
}
