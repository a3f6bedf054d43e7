use crate::interpreter::token::{Token, KEYWORDS};
use crate::interpreter::unit;
use log::trace;
use std::iter::Peekable;
use std::str::Chars;

type Scanner<'a> = Peekable<Chars<'a>>;

/// Converts the given text into a sequence of tokens.
///
/// Scanning never fails: anything that is not a keyword, number or known unit
/// becomes an [`Unknown`](crate::interpreter::token::TokenKind::Unknown) token,
/// leaving it to the parser to reject the command.
///
/// # Arguments
///
/// * `text`: A conversion command, e.g. `convert 1.3 kg to lb`.
///
/// returns: The tokens of the command, in the order they appear.
///
/// # Examples
///
/// ```
/// use unit_converter::interpreter::lexer::tokenize;
/// use unit_converter::interpreter::token::Token;
///
/// let tokens = tokenize("convert 25 °C to F");
/// assert_eq!(tokens[2], Token::unit("°C"));
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut scanner = text.chars().peekable();

    while let Some(&current) = scanner.peek() {
        let token = if is_whitespace(current) {
            scanner.next();
            continue;
        } else if current.is_ascii_digit() {
            Token::number(scan_number(&mut scanner))
        } else if current.is_ascii_alphabetic() {
            classify_word(scan_letters(&mut scanner, String::new()))
        } else if !current.is_ascii() {
            // Symbols such as °, ² and μ start composite spellings like °C or μs.
            scanner.next();
            classify_unit(scan_letters(&mut scanner, current.to_string()))
        } else {
            scanner.next();
            Token::unknown(current)
        };
        trace!("Scanned {}", token);
        tokens.push(token);
    }

    tokens
}

/// The C `isspace` set, which is ASCII whitespace plus vertical tab.
fn is_whitespace(character: char) -> bool {
    character.is_ascii_whitespace() || character == '\x0B'
}

/// Digits with at most one decimal point; a second point ends the number.
fn scan_number(scanner: &mut Scanner) -> String {
    let mut number = String::new();
    let mut has_point = false;
    while let Some(&character) = scanner.peek() {
        if character == '.' && !has_point {
            has_point = true;
        } else if !character.is_ascii_digit() {
            break;
        }
        number.push(character);
        scanner.next();
    }
    number
}

fn scan_letters(scanner: &mut Scanner, mut word: String) -> String {
    while let Some(character) = scanner.next_if(char::is_ascii_alphabetic) {
        word.push(character);
    }
    word
}

fn classify_word(word: String) -> Token {
    if KEYWORDS.contains(&word.as_str()) {
        Token::keyword(word)
    } else {
        classify_unit(word)
    }
}

fn classify_unit(word: String) -> Token {
    if unit::lookup(&word).is_some() {
        Token::unit(word)
    } else {
        Token::unknown(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use proptest::prelude::*;

    #[test]
    fn keywords_are_recognized() {
        let expected_tokens = vec![Token::keyword("convert"), Token::keyword("to")];

        let actual_tokens = tokenize("convert to");

        assert_eq!(actual_tokens, expected_tokens)
    }

    #[test]
    fn numbers_keep_their_literal_text() {
        let expected_tokens = vec![
            Token::number("42"),
            Token::number("3.14"),
            Token::number("100.5"),
        ];

        let actual_tokens = tokenize("42 3.14 100.5");

        assert_eq!(actual_tokens, expected_tokens)
    }

    #[test]
    fn second_decimal_point_ends_number() {
        let expected_tokens = vec![
            Token::number("1.2"),
            Token::unknown("."),
            Token::number("3"),
        ];

        let actual_tokens = tokenize("1.2.3");

        assert_eq!(actual_tokens, expected_tokens)
    }

    #[test]
    fn whitespace_is_skipped() {
        let expected_tokens = vec![
            Token::keyword("convert"),
            Token::number("42"),
            Token::unit("m"),
        ];

        let actual_tokens = tokenize("   convert \t 42 \n  m \x0B ");

        assert_eq!(actual_tokens, expected_tokens)
    }

    #[test]
    fn unrecognized_input_becomes_unknown_tokens() {
        let expected_tokens = vec![
            Token::unknown("xyz"),
            Token::unknown("@"),
            Token::unknown("#"),
            Token::unknown("$"),
        ];

        let actual_tokens = tokenize("xyz @#$");

        assert_eq!(actual_tokens, expected_tokens)
    }

    #[test]
    fn complete_command_is_tokenized() {
        let expected_tokens = vec![
            Token::keyword("convert"),
            Token::number("100"),
            Token::unit("m"),
            Token::keyword("to"),
            Token::unit("cm"),
        ];

        let actual_tokens = tokenize("convert 100 m to cm");

        assert_eq!(actual_tokens, expected_tokens)
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
    }

    #[parameterized(
    text = {
    "°C", "°F", "μm", "μs",
    },
    expected = {
    Token::unit("°C"),
    Token::unit("°F"),
    Token::unit("μm"),
    Token::unit("μs"),
    }
    )]
    fn composite_symbol_spellings_are_units(text: &str, expected: Token) {
        assert_eq!(tokenize(text), vec![expected]);
    }

    #[test]
    fn unknown_symbol_spelling_is_unknown() {
        assert_eq!(tokenize("°X"), vec![Token::unknown("°X")]);
        assert_eq!(tokenize("€"), vec![Token::unknown("€")]);
    }

    #[test]
    fn letters_are_not_joined_with_digits_or_slashes() {
        let expected_tokens = vec![
            Token::unit("m"),
            Token::number("3"),
            Token::unit("km"),
            Token::unknown("/"),
            Token::unit("h"),
        ];

        let actual_tokens = tokenize("m3 km/h");

        assert_eq!(actual_tokens, expected_tokens)
    }

    #[test]
    fn keyword_match_is_exact() {
        assert_eq!(tokenize("Convert"), vec![Token::unknown("Convert")]);
        assert_eq!(tokenize("tom"), vec![Token::unknown("tom")]);
    }

    proptest! {
        #[test]
        fn tokens_cover_all_non_whitespace_text(text in "\\PC*") {
            let tokens = tokenize(&text);
            let rebuilt: String = tokens.iter().map(|token| token.text.as_str()).collect();
            let expected: String = text.chars().filter(|c| !is_whitespace(*c)).collect();
            prop_assert_eq!(rebuilt, expected);
        }

        #[test]
        fn tokens_are_never_empty(text in "\\PC*") {
            prop_assert!(tokenize(&text).iter().all(|token| !token.text.is_empty()));
        }
    }
}
