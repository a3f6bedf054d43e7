use itertools::Itertools;
use once_cell::sync::Lazy;
use ptree::{write_tree, TreeBuilder};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use std::io;

/// A physical quantity within which units can be converted into each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
    Weight,
    Distance,
    Volume,
    Time,
    Temperature,
    Area,
    Speed,
    Pressure,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Weight,
        Dimension::Distance,
        Dimension::Volume,
        Dimension::Time,
        Dimension::Temperature,
        Dimension::Area,
        Dimension::Speed,
        Dimension::Pressure,
    ];

    /// The unit every other unit of the dimension is converted through.
    pub fn base_unit(&self) -> &'static str {
        match self {
            Dimension::Weight => "kg",
            Dimension::Distance => "m",
            Dimension::Volume => "L",
            Dimension::Time => "s",
            Dimension::Temperature => "°C",
            Dimension::Area => "m²",
            Dimension::Speed => "m/s",
            Dimension::Pressure => "Pa",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Weight => "weight",
            Dimension::Distance => "distance",
            Dimension::Volume => "volume",
            Dimension::Time => "time",
            Dimension::Temperature => "temperature",
            Dimension::Area => "area",
            Dimension::Speed => "speed",
            Dimension::Pressure => "pressure",
        };
        write!(f, "{}", name)
    }
}

/// Every recognized unit spelling, grouped by dimension in listing order.
static UNITS: &[(&str, Dimension)] = &[
    ("kg", Dimension::Weight),
    ("g", Dimension::Weight),
    ("mg", Dimension::Weight),
    ("t", Dimension::Weight),
    ("ton", Dimension::Weight),
    ("lb", Dimension::Weight),
    ("oz", Dimension::Weight),
    ("st", Dimension::Weight),
    ("ct", Dimension::Weight),
    ("m", Dimension::Distance),
    ("km", Dimension::Distance),
    ("cm", Dimension::Distance),
    ("mm", Dimension::Distance),
    ("μm", Dimension::Distance),
    ("nm", Dimension::Distance),
    ("mi", Dimension::Distance),
    ("yd", Dimension::Distance),
    ("ft", Dimension::Distance),
    ("in", Dimension::Distance),
    ("nmi", Dimension::Distance),
    ("L", Dimension::Volume),
    ("l", Dimension::Volume),
    ("mL", Dimension::Volume),
    ("ml", Dimension::Volume),
    ("cL", Dimension::Volume),
    ("cl", Dimension::Volume),
    ("dL", Dimension::Volume),
    ("dl", Dimension::Volume),
    ("m³", Dimension::Volume),
    ("m3", Dimension::Volume),
    ("cm³", Dimension::Volume),
    ("cm3", Dimension::Volume),
    ("gal", Dimension::Volume),
    ("qt", Dimension::Volume),
    ("pt", Dimension::Volume),
    ("cup", Dimension::Volume),
    ("fl oz", Dimension::Volume),
    ("tbsp", Dimension::Volume),
    ("tsp", Dimension::Volume),
    ("s", Dimension::Time),
    ("ms", Dimension::Time),
    ("μs", Dimension::Time),
    ("ns", Dimension::Time),
    ("min", Dimension::Time),
    ("h", Dimension::Time),
    ("hr", Dimension::Time),
    ("day", Dimension::Time),
    ("week", Dimension::Time),
    ("month", Dimension::Time),
    ("year", Dimension::Time),
    ("yr", Dimension::Time),
    ("°C", Dimension::Temperature),
    ("C", Dimension::Temperature),
    ("°F", Dimension::Temperature),
    ("F", Dimension::Temperature),
    ("K", Dimension::Temperature),
    ("m²", Dimension::Area),
    ("m2", Dimension::Area),
    ("km²", Dimension::Area),
    ("km2", Dimension::Area),
    ("cm²", Dimension::Area),
    ("cm2", Dimension::Area),
    ("mm²", Dimension::Area),
    ("mm2", Dimension::Area),
    ("ha", Dimension::Area),
    ("acre", Dimension::Area),
    ("ft²", Dimension::Area),
    ("ft2", Dimension::Area),
    ("yd²", Dimension::Area),
    ("yd2", Dimension::Area),
    ("m/s", Dimension::Speed),
    ("km/h", Dimension::Speed),
    ("mph", Dimension::Speed),
    ("ft/s", Dimension::Speed),
    ("knot", Dimension::Speed),
    ("kn", Dimension::Speed),
    ("Pa", Dimension::Pressure),
    ("kPa", Dimension::Pressure),
    ("MPa", Dimension::Pressure),
    ("bar", Dimension::Pressure),
    ("mbar", Dimension::Pressure),
    ("psi", Dimension::Pressure),
    ("atm", Dimension::Pressure),
    ("mmHg", Dimension::Pressure),
    ("inHg", Dimension::Pressure),
];

static CATALOG: Lazy<HashMap<&'static str, Dimension>> =
    Lazy::new(|| UNITS.iter().copied().collect());

/// Finds the dimension of a unit spelling. The match is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use unit_converter::interpreter::unit::{lookup, Dimension};
///
/// assert_eq!(lookup("kg"), Some(Dimension::Weight));
/// assert_eq!(lookup("KG"), None);
/// ```
pub fn lookup(spelling: &str) -> Option<Dimension> {
    CATALOG.get(spelling).copied()
}

/// All spellings of the given dimension, in catalog order.
pub fn units_of(dimension: Dimension) -> Vec<&'static str> {
    UNITS
        .iter()
        .filter(|(_, unit_dimension)| *unit_dimension == dimension)
        .map(|(spelling, _)| *spelling)
        .collect()
}

/// Writes the catalog as a tree with one branch per dimension.
pub fn write_catalog(writer: impl io::Write) -> io::Result<()> {
    let mut builder = TreeBuilder::new("units".into());
    for (dimension, spellings) in &UNITS.iter().group_by(|(_, dimension)| *dimension) {
        builder.begin_child(format!("{} (base: {})", dimension, dimension.base_unit()));
        for (spelling, _) in spellings {
            builder.add_empty_child(spelling.to_string());
        }
        builder.end_child();
    }
    write_tree(&builder.build(), writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    spelling = {
    "kg", "μm", "fl oz", "m³", "°C", "K", "m²", "km/h", "inHg",
    },
    expected = {
    Dimension::Weight,
    Dimension::Distance,
    Dimension::Volume,
    Dimension::Volume,
    Dimension::Temperature,
    Dimension::Temperature,
    Dimension::Area,
    Dimension::Speed,
    Dimension::Pressure,
    }
    )]
    fn lookup_finds_dimension_of_spelling(spelling: &str, expected: Dimension) {
        assert_eq!(lookup(spelling), Some(expected));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("Kg"), None);
        assert_eq!(lookup("pa"), None);
        assert_eq!(lookup("c"), None);
    }

    #[test]
    fn lookup_rejects_unknown_spelling() {
        assert_eq!(lookup("xyz"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn every_spelling_belongs_to_exactly_one_dimension() {
        assert_eq!(CATALOG.len(), UNITS.len());
    }

    #[test]
    fn base_units_are_in_their_own_dimension() {
        for dimension in Dimension::ALL {
            assert_eq!(lookup(dimension.base_unit()), Some(dimension));
        }
    }

    #[test]
    fn units_of_keeps_catalog_order() {
        assert_eq!(units_of(Dimension::Temperature), vec!["°C", "C", "°F", "F", "K"]);
    }

    #[test]
    fn units_of_covers_whole_catalog() {
        let total: usize = Dimension::ALL.iter().map(|d| units_of(*d).len()).sum();
        assert_eq!(total, UNITS.len());
    }

    #[test]
    fn catalog_tree_lists_every_dimension() {
        let mut buffer = Vec::new();
        write_catalog(&mut buffer).unwrap();
        let tree = String::from_utf8(buffer).unwrap();

        for dimension in Dimension::ALL {
            assert!(tree.contains(&dimension.to_string()));
        }
        assert!(tree.contains("fl oz"));
    }
}
