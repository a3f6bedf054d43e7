use std::fmt;
use std::fmt::Formatter;

pub static KEYWORDS: [&str; 2] = ["convert", "to"];

/// The lexical class of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Unit,
    Number,
    Unknown,
}

/// A discrete part of a conversion command, holding the exact text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Token {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn keyword(text: impl Into<String>) -> Token {
        Token::new(TokenKind::Keyword, text)
    }

    pub fn unit(text: impl Into<String>) -> Token {
        Token::new(TokenKind::Unit, text)
    }

    pub fn number(text: impl Into<String>) -> Token {
        Token::new(TokenKind::Number, text)
    }

    pub fn unknown(text: impl Into<String>) -> Token {
        Token::new(TokenKind::Unknown, text)
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == keyword
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Unit => "unit",
            TokenKind::Number => "number",
            TokenKind::Unknown => "unknown word",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}
