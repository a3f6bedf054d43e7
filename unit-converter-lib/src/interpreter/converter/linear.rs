use crate::interpreter::converter::ConversionError;
use crate::interpreter::unit::Dimension;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// How many base units one unit of a dimension is worth.
pub(crate) struct FactorTable {
    pub(crate) base_unit: &'static str,
    factors: HashMap<&'static str, f32>,
}

impl FactorTable {
    fn new(base_unit: &'static str, factors: &[(&'static str, f32)]) -> Self {
        FactorTable {
            base_unit,
            factors: factors.iter().copied().collect(),
        }
    }

    pub(crate) fn factor(&self, unit: &str) -> Result<f32, ConversionError> {
        self.factors
            .get(unit)
            .copied()
            .ok_or_else(|| ConversionError::UnknownUnit(unit.to_string()))
    }
}

static FACTOR_TABLES: Lazy<HashMap<Dimension, FactorTable>> = Lazy::new(|| {
    HashMap::from([
        (
            Dimension::Weight,
            FactorTable::new(
                "kg",
                &[
                    ("kg", 1.0),
                    ("g", 0.001),
                    ("mg", 0.000001),
                    ("t", 1000.0),
                    ("ton", 1000.0),
                    ("lb", 0.453592),
                    ("oz", 0.0283495),
                    ("st", 6.35029),
                    ("ct", 0.0002),
                ],
            ),
        ),
        (
            Dimension::Distance,
            FactorTable::new(
                "m",
                &[
                    ("m", 1.0),
                    ("km", 1000.0),
                    ("cm", 0.01),
                    ("mm", 0.001),
                    ("μm", 0.000001),
                    ("nm", 0.000000001),
                    ("mi", 1609.34),
                    ("yd", 0.9144),
                    ("ft", 0.3048),
                    ("in", 0.0254),
                    ("nmi", 1852.0),
                ],
            ),
        ),
        (
            Dimension::Volume,
            FactorTable::new(
                "L",
                &[
                    ("L", 1.0),
                    ("l", 1.0),
                    ("mL", 0.001),
                    ("ml", 0.001),
                    ("cL", 0.01),
                    ("cl", 0.01),
                    ("dL", 0.1),
                    ("dl", 0.1),
                    ("m³", 1000.0),
                    ("m3", 1000.0),
                    ("cm³", 0.001),
                    ("cm3", 0.001),
                    ("gal", 3.78541),
                    ("qt", 0.946353),
                    ("pt", 0.473176),
                    ("cup", 0.236588),
                    ("fl oz", 0.0295735),
                    ("tbsp", 0.0147868),
                    ("tsp", 0.00492892),
                ],
            ),
        ),
        (
            Dimension::Time,
            FactorTable::new(
                "s",
                &[
                    ("s", 1.0),
                    ("ms", 0.001),
                    ("μs", 0.000001),
                    ("ns", 0.000000001),
                    ("min", 60.0),
                    ("h", 3600.0),
                    ("hr", 3600.0),
                    ("day", 86400.0),
                    ("week", 604800.0),
                    // 30 days
                    ("month", 2592000.0),
                    // 365 days
                    ("year", 31536000.0),
                    ("yr", 31536000.0),
                ],
            ),
        ),
        (
            Dimension::Area,
            FactorTable::new(
                "m²",
                &[
                    ("m²", 1.0),
                    ("m2", 1.0),
                    ("km²", 1000000.0),
                    ("km2", 1000000.0),
                    ("cm²", 0.0001),
                    ("cm2", 0.0001),
                    ("mm²", 0.000001),
                    ("mm2", 0.000001),
                    ("ha", 10000.0),
                    ("acre", 4046.86),
                    ("ft²", 0.092903),
                    ("ft2", 0.092903),
                    ("yd²", 0.836127),
                    ("yd2", 0.836127),
                ],
            ),
        ),
        (
            Dimension::Speed,
            FactorTable::new(
                "m/s",
                &[
                    ("m/s", 1.0),
                    ("km/h", 0.277778),
                    ("mph", 0.44704),
                    ("ft/s", 0.3048),
                    ("knot", 0.51444),
                    ("kn", 0.51444),
                ],
            ),
        ),
        (
            Dimension::Pressure,
            FactorTable::new(
                "Pa",
                &[
                    ("Pa", 1.0),
                    ("kPa", 1000.0),
                    ("MPa", 1000000.0),
                    ("bar", 100000.0),
                    ("mbar", 100.0),
                    ("psi", 6894.76),
                    ("atm", 101325.0),
                    ("mmHg", 133.322),
                    ("inHg", 3386.39),
                ],
            ),
        ),
    ])
});

/// The factor table of a dimension, or `None` for temperature, which is not linear.
pub(crate) fn factor_table(dimension: Dimension) -> Option<&'static FactorTable> {
    FACTOR_TABLES.get(&dimension)
}

/// Converts through the base unit of the table: `value * factor(from) / factor(to)`.
///
/// The factor ratio is taken first so that equal factors give exactly `value`.
pub(crate) fn convert_linear(
    table: &FactorTable,
    value: f32,
    from_unit: &str,
    to_unit: &str,
) -> Result<f32, ConversionError> {
    let ratio = table.factor(from_unit)? / table.factor(to_unit)?;
    Ok(value * ratio)
}
