use super::{
    END_MARKER, ESCAPE, Error, Result,
    tree::{BinaryOp, UnaryOp},
};
use std::str::Chars;

pub mod token;

pub use token::{PosToken, Token};

fn is_grouping_char(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '-')
}

/// Splits a postfix expression into tokens.
pub struct Lexer<'a> {
    input: Chars<'a>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars(),
            pos: 0,
        }
    }

    /// Returns the character index of the next token.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.input.next();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    pub fn next_token(&mut self) -> Result<Option<PosToken>> {
        let pos = self.pos;
        let Some(c) = self.advance() else {
            return Ok(None);
        };

        let token = match c {
            ESCAPE => {
                let Some(escaped) = self.advance() else {
                    return Err(Error::DanglingEscape { pos });
                };
                Token::EscapedOperand(escaped)
            }
            END_MARKER => Token::EndMarker,
            c if is_grouping_char(c) => Token::Grouping(c),
            c => {
                if let Some(op) = UnaryOp::from_symbol(c) {
                    Token::Unary(op)
                } else if let Some(op) = BinaryOp::from_symbol(c) {
                    Token::Binary(op)
                } else {
                    Token::Operand(c)
                }
            }
        };

        Ok(Some(PosToken { pos, token }))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<PosToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
