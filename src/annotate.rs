use super::{
    PositionSet,
    tree::{BinaryOp, NodeKind, Tree, UnaryOp},
};

/// Computes `nullable`, `firstpos` and `lastpos` for every node of the tree,
/// children before parents.
///
/// Every attribute is recomputed from the children, so annotating an already
/// annotated tree leaves it unchanged.
pub fn annotate(tree: &mut Tree) {
    // Arena order is post-order, so both children are final by the time
    // their parent is reached.
    for index in 0..tree.nodes.len() {
        let (nullable, firstpos, lastpos) = match tree.nodes[index].kind {
            NodeKind::Leaf { position, .. } => (
                false,
                PositionSet::singleton(position),
                PositionSet::singleton(position),
            ),
            NodeKind::Unary { op, operand } => {
                let operand = &tree[operand];
                let nullable = match op {
                    UnaryOp::Star | UnaryOp::Optional => true,
                    UnaryOp::Plus => operand.nullable,
                };
                (nullable, operand.firstpos.clone(), operand.lastpos.clone())
            }
            NodeKind::Binary { op, left, right } => {
                let (left, right) = (&tree[left], &tree[right]);
                match op {
                    BinaryOp::Concat => {
                        let mut firstpos = left.firstpos.clone();
                        if left.nullable {
                            firstpos.union_with(&right.firstpos);
                        }
                        let mut lastpos = right.lastpos.clone();
                        if right.nullable {
                            lastpos.union_with(&left.lastpos);
                        }
                        (left.nullable && right.nullable, firstpos, lastpos)
                    }
                    BinaryOp::Union => {
                        let mut firstpos = left.firstpos.clone();
                        firstpos.union_with(&right.firstpos);
                        let mut lastpos = left.lastpos.clone();
                        lastpos.union_with(&right.lastpos);
                        (left.nullable || right.nullable, firstpos, lastpos)
                    }
                }
            }
        };

        let node = &mut tree.nodes[index];
        node.nullable = nullable;
        node.firstpos = firstpos;
        node.lastpos = lastpos;
    }

    let root = tree.root();
    log::debug!(
        "annotated tree: nullable={}, firstpos={:?}, lastpos={:?}",
        root.nullable,
        root.firstpos,
        root.lastpos
    );
}
