#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Star,     // * (0 or more)
    Plus,     // + (1 or more)
    Optional, // ? (0 or 1)
}

impl UnaryOp {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            UnaryOp::Star => '*',
            UnaryOp::Plus => '+',
            UnaryOp::Optional => '?',
        }
    }

    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '*' => Some(UnaryOp::Star),
            '+' => Some(UnaryOp::Plus),
            '?' => Some(UnaryOp::Optional),
            _ => None,
        }
    }

    /// Returns `true` if the operand may be matched more than once.
    #[must_use]
    pub const fn repeats(self) -> bool {
        matches!(self, UnaryOp::Star | UnaryOp::Plus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Concat, // .
    Union,  // |
}

impl BinaryOp {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            BinaryOp::Concat => '.',
            BinaryOp::Union => '|',
        }
    }

    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(BinaryOp::Concat),
            '|' => Some(BinaryOp::Union),
            _ => None,
        }
    }
}
