//! Builds the annotated syntax tree used for direct regex-to-DFA
//! construction from a postfix regular expression.
//!
//! Every node carries `nullable`, `firstpos` and `lastpos`, and every leaf
//! carries `followpos`. A downstream automaton builder starts from the root's
//! `firstpos` and follows the `followpos` sets of each state's members.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod annotate;
pub mod builder;
pub mod followpos;
pub mod lexer;
pub mod position_set;
pub mod tree;

pub use self::{
    annotate::annotate,
    builder::build,
    followpos::{compute_followpos, followpos_table},
    lexer::{Lexer, PosToken, Token},
    position_set::PositionSet,
    tree::{BinaryOp, Node, NodeId, NodeKind, SyntaxTree, Tree, UnaryOp},
};

/// The augmentation symbol marking the end of the expression.
pub const END_MARKER: char = '#';

/// Escapes the following character so it is read as an operand.
pub const ESCAPE: char = '\\';

/// Every error describes a malformed postfix expression. Construction is
/// all-or-nothing, so no partial tree accompanies an error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// An operator found fewer subtrees on the stack than its arity.
    #[error("malformed expression (missing operand for '{op}') at {pos}")]
    MissingOperand { pos: usize, op: char },

    /// More than one subtree was left once every token was reduced.
    #[error("malformed expression ({count} subtrees left, expected 1)")]
    UnconsumedOperands { count: usize },

    /// The expression contains no tokens.
    #[error("malformed expression (empty)")]
    EmptyExpression,

    /// A grouping or range metacharacter was not resolved before conversion
    /// to postfix.
    #[error("malformed expression (unresolved metacharacter '{lit}') at {pos}")]
    UnresolvedMetacharacter { pos: usize, lit: char },

    /// The expression ends with an escape that has nothing to escape.
    #[error("malformed expression (ends with '{ESCAPE}') at {pos}")]
    DanglingEscape { pos: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
