//! Transmission power-band mapping

use serde::{Deserialize, Serialize};

use crate::catalog::TRANSMISSION_BANDS;

/// One of the four fixed transmission power bands.
///
/// The bands do not overlap and do not cover the whole HP axis: gaps (e.g.
/// 2.0 < hp < 3.0 fractions such as 2.5, or anything above 30) map to no
/// band at all, which skips transmission lookup entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    Low,
    MidLow,
    MidHigh,
    High,
}

impl Band {
    /// Map an HP value to its band; inclusive bounds.
    pub fn for_hp(hp: f64) -> Option<Band> {
        if (0.25..=2.0).contains(&hp) {
            Some(Band::Low)
        } else if (3.0..=5.0).contains(&hp) {
            Some(Band::MidLow)
        } else if (7.5..=10.0).contains(&hp) {
            Some(Band::MidHigh)
        } else if (15.0..=30.0).contains(&hp) {
            Some(Band::High)
        } else {
            None
        }
    }

    /// The catalog category name transmissions of this band are filed under.
    pub fn category(&self) -> &'static str {
        match self {
            Band::Low => TRANSMISSION_BANDS[0],
            Band::MidLow => TRANSMISSION_BANDS[1],
            Band::MidHigh => TRANSMISSION_BANDS[2],
            Band::High => TRANSMISSION_BANDS[3],
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_bounds_are_inclusive() {
        assert_eq!(Band::for_hp(0.25), Some(Band::Low));
        assert_eq!(Band::for_hp(2.0), Some(Band::Low));
        assert_eq!(Band::for_hp(3.0), Some(Band::MidLow));
        assert_eq!(Band::for_hp(5.0), Some(Band::MidLow));
        assert_eq!(Band::for_hp(7.5), Some(Band::MidHigh));
        assert_eq!(Band::for_hp(10.0), Some(Band::MidHigh));
        assert_eq!(Band::for_hp(15.0), Some(Band::High));
        assert_eq!(Band::for_hp(30.0), Some(Band::High));
    }

    #[test]
    fn test_adjacent_boundaries_map_to_distinct_bands() {
        assert_ne!(Band::for_hp(2.0), Band::for_hp(3.0));
        assert_ne!(Band::for_hp(5.0), Band::for_hp(7.5));
        assert_ne!(Band::for_hp(10.0), Band::for_hp(15.0));
    }

    #[test]
    fn test_gaps_map_to_none() {
        assert_eq!(Band::for_hp(1.0), Some(Band::Low));
        assert_eq!(Band::for_hp(2.5), None);
        assert_eq!(Band::for_hp(6.0), None);
        assert_eq!(Band::for_hp(12.0), None);
        assert_eq!(Band::for_hp(31.0), None);
        assert_eq!(Band::for_hp(0.1), None);
    }

    #[test]
    fn test_band_category_names() {
        assert_eq!(Band::Low.category(), "0.25-2HP");
        assert_eq!(Band::MidLow.category(), "3-5HP");
        assert_eq!(Band::MidHigh.category(), "7.5-10HP");
        assert_eq!(Band::High.category(), "15-30HP");
    }
}
