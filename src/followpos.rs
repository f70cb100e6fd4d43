use super::{
    PositionSet,
    tree::{BinaryOp, NodeKind, Tree},
};

/// Accumulates every leaf's `followpos` set. Must run after
/// [`annotate`](crate::annotate).
///
/// Contributions are unioned into the existing sets, so running it again
/// changes nothing.
pub fn compute_followpos(tree: &mut Tree) {
    let table = followpos_table(tree);

    for &id in &tree.leaves {
        if let NodeKind::Leaf {
            position,
            followpos,
            ..
        } = &mut tree.nodes[id.index()].kind
            && let Some(contribution) = table.get(*position)
        {
            followpos.union_with(contribution);
        }
    }

    log::debug!(
        "computed followpos for {} positions",
        table.len().saturating_sub(1)
    );
}

/// Computes the followpos contributions of every operator node without
/// touching the tree. The table is indexed by position; index 0 is unused.
#[must_use]
pub fn followpos_table(tree: &Tree) -> Vec<PositionSet> {
    let mut table = vec![PositionSet::new(); tree.leaf_count() + 1];

    concatenation_sweep(tree, &mut table);
    repetition_sweep(tree, &mut table);

    table
}

/// Whatever ends the left side of `.` can be followed by whatever starts the
/// right side.
fn concatenation_sweep(tree: &Tree, table: &mut [PositionSet]) {
    for node in tree.nodes() {
        if let NodeKind::Binary {
            op: BinaryOp::Concat,
            left,
            right,
        } = *node.kind()
        {
            let firstpos = tree[right].firstpos();
            for i in tree[left].lastpos() {
                table[i].union_with(firstpos);
            }
        }
    }
}

/// Applies to `*` and `+` only; `?` cannot repeat its operand.
fn repetition_sweep(tree: &Tree, table: &mut [PositionSet]) {
    for node in tree.nodes() {
        if let NodeKind::Unary { op, operand } = *node.kind()
            && op.repeats()
        {
            let lastpos = tree[operand].lastpos();
            for i in node.firstpos() {
                table[i].union_with(lastpos);
            }
        }
    }
}
