mod request;
mod token_stream;

pub use crate::interpreter::parser::request::ConversionRequest;
use crate::interpreter::parser::token_stream::TokenStream;
use crate::interpreter::token::{Token, TokenKind};
use log::debug;
use thiserror::Error;

/// Why a token sequence is not a conversion command.
///
/// Every variant is a terminal failure of the whole parse; the variants only
/// exist to tell the user where the command went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, but the command ended")]
    UnexpectedEnd { expected: &'static str },
    #[error("expected {expected}, found {found} at position {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: Token,
        position: usize,
    },
    #[error("unexpected {found} at position {position} after the end of the command")]
    TrailingTokens { found: Token, position: usize },
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

/// Parses the given tokens into a conversion request.
///
/// The tokens have to form exactly `convert <number> <unit> to <unit>`,
/// nothing is skipped or recovered, so either the whole request is returned
/// or an error.
///
/// # Arguments
///
/// * `tokens`: The tokens of a command, as produced by the lexer.
///
/// returns: The value and the two unit spellings of the command.
///
/// # Examples
///
/// ```
/// # use unit_converter::interpreter::parser::ParseError;
/// # fn main() -> Result<(), ParseError> {
/// use unit_converter::interpreter::parser::parse;
/// use unit_converter::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::keyword("convert"),
///     Token::number("1.3"),
///     Token::unit("kg"),
///     Token::keyword("to"),
///     Token::unit("lb"),
/// ];
/// let request = parse(tokens)?;
/// assert_eq!(request.from_unit, "kg");
/// # Ok(()) }
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<ConversionRequest, ParseError> {
    let mut stream = TokenStream::new(tokens);

    stream.expect_keyword("convert")?;
    let number = stream.expect_kind(TokenKind::Number, "a number")?;
    let value = parse_number(&number.text)?;
    let from_unit = stream.expect_kind(TokenKind::Unit, "a source unit")?;
    stream.expect_keyword("to")?;
    let to_unit = stream.expect_kind(TokenKind::Unit, "a target unit")?;
    stream.expect_end()?;

    let request = ConversionRequest::new(value, from_unit.text, to_unit.text);
    debug!("Parsed {} tokens into request '{}'", stream.position(), request);
    Ok(request)
}

/// Digit runs beyond the `f32` range are rejected rather than read as infinity.
fn parse_number(text: &str) -> Result<f32, ParseError> {
    match text.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber(text.to_string())),
    }
}
