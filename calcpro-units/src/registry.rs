//! Unit definitions - the static category tables
//!
//! Factors convert one category-base-unit into the named unit (for length
//! the base is meters, so "Kilometers" is 0.001). Factors are positive
//! constants by construction; the conversion engine relies on that and
//! performs no runtime zero check.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// The three supported unit categories. Fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Area,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 3] =
        [UnitCategory::Length, UnitCategory::Weight, UnitCategory::Area];

    pub fn name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Area => "area",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "length" => Some(UnitCategory::Length),
            "weight" => Some(UnitCategory::Weight),
            "area" => Some(UnitCategory::Area),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One unit within a category: display name plus the factor that converts
/// one base unit into this unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    pub name: &'static str,
    pub factor: f64,
}

const fn unit(name: &'static str, factor: f64) -> UnitDef {
    UnitDef { name, factor }
}

static LENGTH_UNITS: [UnitDef; 11] = [
    unit("Kilometers", 0.001),
    unit("Meters", 1.0),
    unit("Centimeters", 100.0),
    unit("Millimeters", 1000.0),
    unit("Micrometers", 1_000_000.0),
    unit("Nanometers", 1_000_000_000.0),
    unit("Miles", 0.000621371),
    unit("Yards", 1.09361),
    unit("Feet", 3.28084),
    unit("Inches", 39.3701),
    unit("Nautical Miles", 0.000539957),
];

static WEIGHT_UNITS: [UnitDef; 7] = [
    unit("Kilograms", 1.0),
    unit("Grams", 1000.0),
    unit("Milligrams", 1_000_000.0),
    unit("Metric Tons", 0.001),
    unit("Pounds", 2.20462),
    unit("Ounces", 35.274),
    unit("Stone", 0.157473),
];

static AREA_UNITS: [UnitDef; 8] = [
    unit("Square Millimeters", 1_000_000.0),
    unit("Square Centimeters", 10_000.0),
    unit("Square Meters", 1.0),
    unit("Square Kilometers", 0.000001),
    unit("Are", 0.01),
    unit("Hectares", 0.0001),
    unit("Acres", 0.000247105),
    unit("Square Feet", 10.7639),
];

/// Registry of all known units, ordered within each category.
pub struct UnitRegistry;

impl UnitRegistry {
    fn new() -> Self {
        debug_assert!(UnitCategory::ALL
            .iter()
            .flat_map(|c| UnitRegistry.category(*c))
            .all(|u| u.factor > 0.0));
        UnitRegistry
    }

    /// All units of a category, in display order.
    pub fn category(&self, category: UnitCategory) -> &'static [UnitDef] {
        match category {
            UnitCategory::Length => &LENGTH_UNITS,
            UnitCategory::Weight => &WEIGHT_UNITS,
            UnitCategory::Area => &AREA_UNITS,
        }
    }

    /// Look up a unit by display name. Case-sensitive: the presentation
    /// layer always supplies names taken from this registry.
    pub fn get(&self, category: UnitCategory, name: &str) -> Option<&'static UnitDef> {
        self.category(category).iter().find(|u| u.name == name)
    }

    /// Unit names of a category, in display order.
    pub fn names(&self, category: UnitCategory) -> Vec<&'static str> {
        self.category(category).iter().map(|u| u.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for cat in UnitCategory::ALL {
            assert_eq!(UnitCategory::from_name(cat.name()), Some(cat));
        }
        assert_eq!(UnitCategory::from_name("volume"), None);
    }

    #[test]
    fn test_every_category_has_a_base_unit() {
        for cat in UnitCategory::ALL {
            assert!(
                UNITS.category(cat).iter().any(|u| u.factor == 1.0),
                "category {cat} has no base unit"
            );
        }
    }

    #[test]
    fn test_all_factors_positive() {
        for cat in UnitCategory::ALL {
            for u in UNITS.category(cat) {
                assert!(u.factor > 0.0, "{} has non-positive factor", u.name);
            }
        }
    }

    #[test]
    fn test_lookup_preserves_order() {
        let names = UNITS.names(UnitCategory::Length);
        assert_eq!(names.first(), Some(&"Kilometers"));
        assert_eq!(names.last(), Some(&"Nautical Miles"));
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(UNITS.get(UnitCategory::Weight, "Feet").is_none());
        assert!(UNITS.get(UnitCategory::Length, "Feet").is_some());
    }
}
