pub mod converter;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod unit;

use crate::interpreter::converter::ConversionError;
use crate::interpreter::parser::{ConversionRequest, ParseError};
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Any failure of the pipeline. Each one ends the evaluation of the command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("could not parse the conversion request")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// A converted request together with its result.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub result: f32,
}

/// Tokenizes, parses and converts the given command.
///
/// # Arguments
///
/// * `text`: A command of the form `convert <value> <unit> to <unit>`.
///
/// returns: The parsed request and the converted value.
///
/// # Examples
///
/// ```
/// use unit_converter::interpreter::evaluate;
/// # use unit_converter::interpreter::Error;
///
/// # fn main() -> Result<(), Error> {
/// let conversion = evaluate("convert 25 C to F")?;
/// assert_eq!(conversion.result, 77.0);
/// # Ok::<(), Error>(()) }
/// ```
pub fn evaluate(text: &str) -> Result<Conversion, Error> {
    let tokens = lexer::tokenize(text);
    debug!("Scanned {} tokens from '{}'", tokens.len(), text);
    let request = parser::parse(tokens)?;
    let result = converter::convert(&request)?;
    Ok(Conversion { request, result })
}

/// Formats a conversion as `<value> <from> = <result> <to>`.
///
/// # Arguments
///
/// * `conversion`: The conversion to print.
///
/// returns: The conversion line, numbers printed with six significant digits.
///
/// # Examples
///
/// ```
/// use unit_converter::interpreter::{evaluate, render};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let line = render(&evaluate("convert 1.3 kg to lb")?)?;
/// assert_eq!(line, "1.3 kg = 2.86601 lb");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn render(conversion: &Conversion) -> Result<String> {
    let ConversionRequest {
        value,
        from_unit,
        to_unit,
    } = &conversion.request;
    let mut builder = Builder::new(7);

    builder.append(format_number(*value));
    builder.append(" ");
    builder.append(from_unit.as_str());
    builder.append(" = ");
    builder.append(format_number(conversion.result));
    builder.append(" ");
    builder.append(to_unit.as_str());

    builder.string().context("Failed to build conversion string")
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// Prints a number with six significant digits and no trailing zeros,
/// switching to exponent form for very small or large magnitudes.
fn format_number(value: f32) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    // Rounding to the significant digits first gives the exponent after any carry.
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
