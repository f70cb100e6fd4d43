pub mod node;
pub mod operator;

pub use self::{
    node::{Node, NodeId, NodeKind},
    operator::{BinaryOp, UnaryOp},
};

use super::{PositionSet, Result, annotate, builder, followpos};
use std::{ops::Index, str::FromStr};

/// Nodes stored in creation order, which is post-order: children before
/// their parent, left before right. The root is the last node.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) leaves: Vec<NodeId>,
    root: NodeId,
}

impl Tree {
    #[must_use]
    pub(crate) fn new(nodes: Vec<Node>, leaves: Vec<NodeId>, root: NodeId) -> Self {
        Self {
            nodes,
            leaves,
            root,
        }
    }

    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn root(&self) -> &Node {
        &self[self.root]
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The operand of a unary node, or the left side of a binary one.
    #[must_use]
    pub fn left(&self, node: &Node) -> Option<&Node> {
        node.left().map(|id| &self[id])
    }

    #[must_use]
    pub fn right(&self, node: &Node) -> Option<&Node> {
        node.right().map(|id| &self[id])
    }

    /// Every node, children before their parent.
    pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// The number of leaves, which is also the largest position.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The leaf at `position`, counting from 1.
    #[must_use]
    pub fn leaf(&self, position: usize) -> Option<&Node> {
        let id = *self.leaves.get(position.checked_sub(1)?)?;
        Some(&self[id])
    }

    /// The leaves in position order.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.leaves.iter().map(|&id| &self[id])
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// A fully annotated syntax tree, ready for DFA state construction.
///
/// The start state is [`start_positions`](Self::start_positions); the
/// transitions of a state follow from the [`followpos`](Self::followpos) sets
/// of its member positions. Dereferences to the read-only [`Tree`].
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    tree: Tree,
}

impl SyntaxTree {
    /// Builds and annotates the tree for a postfix `expression`.
    ///
    /// # Errors
    ///
    /// If the expression is malformed, an [`Error`](crate::Error) is returned
    /// and no tree is produced.
    pub fn new(expression: &str) -> Result<Self> {
        let mut tree = builder::build(expression)?;
        annotate::annotate(&mut tree);
        followpos::compute_followpos(&mut tree);

        log::debug!(
            "annotated syntax tree with {} nodes and {} leaves",
            tree.nodes.len(),
            tree.leaf_count()
        );

        Ok(Self { tree })
    }

    #[must_use]
    pub fn followpos(&self, position: usize) -> Option<&PositionSet> {
        self.leaf(position).and_then(Node::followpos)
    }

    /// The positions of the initial DFA state.
    #[must_use]
    pub fn start_positions(&self) -> &PositionSet {
        self.root().firstpos()
    }

    /// The position of the augmentation leaf, if the expression ends with one.
    #[must_use]
    pub fn end_marker(&self) -> Option<usize> {
        self.leaf(self.leaf_count())
            .filter(|leaf| leaf.is_end_marker())
            .and_then(Node::position)
    }
}

impl std::ops::Deref for SyntaxTree {
    type Target = Tree;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl FromStr for SyntaxTree {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SyntaxTree {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
