mod linear;
mod temperature;

use crate::interpreter::converter::linear::{convert_linear, factor_table};
use crate::interpreter::converter::temperature::convert_temperature;
use crate::interpreter::parser::ConversionRequest;
use crate::interpreter::unit;
use crate::interpreter::unit::Dimension;
use log::debug;
use thiserror::Error;

/// Why a parsed request could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
    #[error("cannot convert {0} to {1}: incompatible dimensions")]
    IncompatibleDimensions(String, String),
}

/// Converts the value of the request from its source unit into its target unit.
///
/// # Arguments
///
/// * `request`: A parsed conversion request.
///
/// returns: The value expressed in the target unit.
///
/// # Examples
///
/// ```
/// # use unit_converter::interpreter::converter::ConversionError;
/// # fn main() -> Result<(), ConversionError> {
/// use unit_converter::interpreter::converter::convert;
/// use unit_converter::interpreter::parser::ConversionRequest;
///
/// let result = convert(&ConversionRequest::new(25.0, "C", "F"))?;
/// assert_eq!(result, 77.0);
/// # Ok(()) }
/// ```
pub fn convert(request: &ConversionRequest) -> Result<f32, ConversionError> {
    let ConversionRequest {
        value,
        from_unit,
        to_unit,
    } = request;
    let from_dimension = dimension_of(from_unit)?;
    let to_dimension = dimension_of(to_unit)?;
    if from_dimension != to_dimension {
        debug!(
            "Rejected {} -> {}: {} is not {}",
            from_unit, to_unit, from_dimension, to_dimension
        );
        return Err(ConversionError::IncompatibleDimensions(
            from_unit.clone(),
            to_unit.clone(),
        ));
    }

    let result = match factor_table(from_dimension) {
        Some(table) => {
            debug!("Converting {} through base unit {}", from_dimension, table.base_unit);
            convert_linear(table, *value, from_unit, to_unit)?
        }
        None => {
            debug!("Converting {} through °C", from_dimension);
            convert_temperature(*value, from_unit, to_unit)?
        }
    };
    debug!("Converted '{}' into {}", request, result);
    Ok(result)
}

fn dimension_of(unit: &str) -> Result<Dimension, ConversionError> {
    unit::lookup(unit).ok_or_else(|| ConversionError::UnknownUnit(unit.to_string()))
}
