use super::{
    super::{END_MARKER, PositionSet},
    BinaryOp, UnaryOp,
};

/// Index of a node in its [`Tree`](super::Tree).
///
/// Children are always created before their parent, so a child's id is
/// smaller than its parent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum NodeKind {
    Leaf {
        position: usize,        // 1-based, in order of appearance
        end_marker: bool,       // unescaped `#`
        followpos: PositionSet, // only ever grows
    },
    Unary {
        op: UnaryOp,
        operand: NodeId,
    },
    Binary {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
}

/// A syntax tree node together with its position annotations.
///
/// A freshly built node is unannotated: `nullable` is `false` and every set
/// is empty until [`annotate`](crate::annotate) runs.
#[derive(Clone, PartialEq, Debug)]
pub struct Node {
    symbol: char,
    pub(crate) kind: NodeKind,
    pub(crate) nullable: bool,
    pub(crate) firstpos: PositionSet,
    pub(crate) lastpos: PositionSet,
}

impl Node {
    pub(crate) fn leaf(symbol: char, position: usize) -> Self {
        Self::with_kind(
            symbol,
            NodeKind::Leaf {
                position,
                end_marker: false,
                followpos: PositionSet::new(),
            },
        )
    }

    pub(crate) fn end_marker(position: usize) -> Self {
        Self::with_kind(
            END_MARKER,
            NodeKind::Leaf {
                position,
                end_marker: true,
                followpos: PositionSet::new(),
            },
        )
    }

    pub(crate) fn unary(op: UnaryOp, operand: NodeId) -> Self {
        Self::with_kind(op.symbol(), NodeKind::Unary { op, operand })
    }

    pub(crate) fn binary(op: BinaryOp, left: NodeId, right: NodeId) -> Self {
        Self::with_kind(op.symbol(), NodeKind::Binary { op, left, right })
    }

    fn with_kind(symbol: char, kind: NodeKind) -> Self {
        Self {
            symbol,
            kind,
            nullable: false,
            firstpos: PositionSet::new(),
            lastpos: PositionSet::new(),
        }
    }

    /// The operator symbol, or the operand character for leaves.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The operand of a unary operator, or the left side of a binary one.
    #[must_use]
    pub fn left(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Unary { operand, .. } => Some(operand),
            NodeKind::Binary { left, .. } => Some(left),
        }
    }

    #[must_use]
    pub fn right(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Binary { right, .. } => Some(right),
            _ => None,
        }
    }

    #[must_use]
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    #[must_use]
    pub fn firstpos(&self) -> &PositionSet {
        &self.firstpos
    }

    #[must_use]
    pub fn lastpos(&self) -> &PositionSet {
        &self.lastpos
    }

    /// The leaf position, `None` for operator nodes.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Leaf { position, .. } => Some(position),
            _ => None,
        }
    }

    /// The leaf's followpos set, `None` for operator nodes.
    #[must_use]
    pub fn followpos(&self) -> Option<&PositionSet> {
        match &self.kind {
            NodeKind::Leaf { followpos, .. } => Some(followpos),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Returns `true` for the augmentation leaf. An escaped `\#` is an
    /// ordinary operand.
    #[must_use]
    pub fn is_end_marker(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Leaf {
                end_marker: true,
                ..
            }
        )
    }
}
