use crate::interpreter::parser::ParseError;
use crate::interpreter::token::{Token, TokenKind};
use std::collections::VecDeque;

/// Tokens waiting to be consumed by the parser, front first.
pub(crate) struct TokenStream {
    tokens: VecDeque<Token>,
    position: usize,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: VecDeque::from(tokens),
            position: 0,
        }
    }

    /// Number of tokens consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Consumes the next token if it is of the given kind.
    pub(crate) fn expect_kind(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        match self.tokens.front() {
            None => Err(ParseError::UnexpectedEnd { expected }),
            Some(token) if token.kind != kind => Err(ParseError::UnexpectedToken {
                expected,
                found: token.clone(),
                position: self.position,
            }),
            Some(_) => self.advance(expected),
        }
    }

    /// Consumes the next token if it is exactly the given keyword.
    pub(crate) fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), ParseError> {
        match self.tokens.front() {
            None => Err(ParseError::UnexpectedEnd { expected: keyword }),
            Some(token) if !token.is_keyword(keyword) => Err(ParseError::UnexpectedToken {
                expected: keyword,
                found: token.clone(),
                position: self.position,
            }),
            Some(_) => self.advance(keyword).map(|_| ()),
        }
    }

    /// Succeeds only if every token has been consumed.
    pub(crate) fn expect_end(&self) -> Result<(), ParseError> {
        match self.tokens.front() {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingTokens {
                found: token.clone(),
                position: self.position,
            }),
        }
    }

    fn advance(&mut self, expected: &'static str) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .pop_front()
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        self.position += 1;
        Ok(token)
    }
}
