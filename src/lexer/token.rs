use crate::{
    END_MARKER,
    tree::{BinaryOp, UnaryOp},
};

/// A postfix expression token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A literal operand character.
    Operand(char),
    /// An operand character escaped by `\`.
    EscapedOperand(char),
    /// `#`, the augmentation symbol.
    EndMarker,
    /// `*`, `+` or `?`.
    Unary(UnaryOp),
    /// `.` or `|`.
    Binary(BinaryOp),
    /// `(`, `)`, `[`, `]` or `-`. Recognised, but never reducible.
    Grouping(char),
}

impl Token {
    /// Returns the character the token stands for. Escaped operands return
    /// the escaped character.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Token::Operand(c) | Token::EscapedOperand(c) | Token::Grouping(c) => c,
            Token::EndMarker => END_MARKER,
            Token::Unary(op) => op.symbol(),
            Token::Binary(op) => op.symbol(),
        }
    }

    /// Returns `true` if the token becomes a leaf.
    #[must_use]
    pub const fn is_operand(self) -> bool {
        matches!(
            self,
            Token::Operand(_) | Token::EscapedOperand(_) | Token::EndMarker
        )
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Copy, Debug, Eq)]
pub struct PosToken {
    /// The character index of the token in the expression.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}
