use crate::interpreter::converter::ConversionError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Accepts the spellings with and without the degree sign.
    pub(crate) fn from_spelling(spelling: &str) -> Result<Self, ConversionError> {
        match spelling {
            "°C" | "C" => Ok(TemperatureScale::Celsius),
            "°F" | "F" => Ok(TemperatureScale::Fahrenheit),
            "K" => Ok(TemperatureScale::Kelvin),
            unit => Err(ConversionError::UnknownUnit(unit.to_string())),
        }
    }

    fn to_celsius(self, value: f32) -> f32 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - 273.15,
        }
    }

    fn convert_celsius(self, celsius: f32) -> f32 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + 273.15,
        }
    }
}

/// Converts between temperature scales by way of Celsius.
pub(crate) fn convert_temperature(
    value: f32,
    from_unit: &str,
    to_unit: &str,
) -> Result<f32, ConversionError> {
    let from = TemperatureScale::from_spelling(from_unit)?;
    let to = TemperatureScale::from_spelling(to_unit)?;
    Ok(to.convert_celsius(from.to_celsius(value)))
}
