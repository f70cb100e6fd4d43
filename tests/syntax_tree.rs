use followpos::{Error, PositionSet, Result, SyntaxTree};
use std::collections::{BTreeMap, HashMap};

fn set(positions: &[usize]) -> PositionSet {
    positions.iter().copied().collect()
}

/// A minimal DFA derived from the followpos tables, for checking that the
/// annotations describe the intended language.
struct Dfa {
    start: usize,
    accepting: Vec<bool>,
    transitions: Vec<BTreeMap<char, usize>>,
}

impl Dfa {
    fn new(tree: &SyntaxTree) -> Self {
        let end = tree.end_marker().expect("expression must be augmented");
        let mut ids = HashMap::new();
        let mut states = vec![tree.start_positions().clone()];
        let mut dfa = Dfa {
            start: 0,
            accepting: Vec::new(),
            transitions: Vec::new(),
        };
        ids.insert(states[0].clone(), 0);

        let mut index = 0;
        while index < states.len() {
            let state = states[index].clone();
            let mut moves: BTreeMap<char, PositionSet> = BTreeMap::new();
            for position in &state {
                let leaf = tree.leaf(position).unwrap();
                if position != end {
                    moves
                        .entry(leaf.symbol())
                        .or_default()
                        .union_with(tree.followpos(position).unwrap());
                }
            }

            let mut edges = BTreeMap::new();
            for (symbol, target) in moves {
                let id = *ids.entry(target.clone()).or_insert_with(|| {
                    states.push(target);
                    states.len() - 1
                });
                edges.insert(symbol, id);
            }
            dfa.accepting.push(state.contains(end));
            dfa.transitions.push(edges);
            index += 1;
        }
        dfa
    }

    fn accepts(&self, input: &str) -> bool {
        let mut state = self.start;
        for c in input.chars() {
            match self.transitions[state].get(&c) {
                Some(&next) => state = next,
                None => return false,
            }
        }
        self.accepting[state]
    }
}

#[track_caller]
fn assert_language(expression: &str, accepted: &[&str], rejected: &[&str]) {
    let tree = SyntaxTree::new(expression).expect("valid expression");
    let dfa = Dfa::new(&tree);
    for input in accepted {
        assert!(dfa.accepts(input), "{expression:?} should accept {input:?}");
    }
    for input in rejected {
        assert!(!dfa.accepts(input), "{expression:?} should reject {input:?}");
    }
}

#[test]
fn test_concat_syntax_tree() -> Result<()> {
    let tree = SyntaxTree::new("ab.")?;
    let root = tree.root();
    assert!(!root.nullable());
    assert_eq!(root.firstpos(), &set(&[1]));
    assert_eq!(root.lastpos(), &set(&[2]));
    assert_eq!(tree.leaf(1).map(|leaf| leaf.symbol()), Some('a'));
    assert_eq!(tree.leaf(2).map(|leaf| leaf.symbol()), Some('b'));
    assert_eq!(tree.followpos(1), Some(&set(&[2])));
    assert_eq!(tree.followpos(2), Some(&set(&[])));
    Ok(())
}

#[test]
fn test_star_syntax_tree() -> Result<()> {
    let tree = SyntaxTree::new("a*")?;
    let root = tree.root();
    assert_eq!(root.symbol(), '*');
    assert!(root.nullable());
    assert_eq!(root.firstpos(), &set(&[1]));
    assert_eq!(root.lastpos(), &set(&[1]));
    assert_eq!(tree.followpos(1), Some(&set(&[1])));
    Ok(())
}

#[test]
fn test_union_syntax_tree() -> Result<()> {
    let tree = SyntaxTree::new("ab|")?;
    let root = tree.root();
    assert!(!root.nullable());
    assert_eq!(root.firstpos(), &set(&[1, 2]));
    assert_eq!(root.lastpos(), &set(&[1, 2]));
    assert!(tree.leaves().all(|leaf| leaf.followpos().unwrap().is_empty()));
    Ok(())
}

#[test]
fn test_malformed_syntax_tree() {
    assert_eq!(
        SyntaxTree::new("a."),
        Err(Error::MissingOperand { pos: 1, op: '.' })
    );
    assert_eq!(
        "ab".parse::<SyntaxTree>(),
        Err(Error::UnconsumedOperands { count: 2 })
    );
    assert!(SyntaxTree::try_from("").is_err());
}

#[test]
fn test_accessors_syntax_tree() -> Result<()> {
    let tree: SyntaxTree = "ab|*a.b.b.#.".parse()?;
    assert_eq!(tree.leaf_count(), 6);
    assert_eq!(tree.start_positions(), &set(&[1, 2, 3]));
    assert_eq!(tree.end_marker(), Some(6));
    assert_eq!(tree.leaf(0), None);
    assert_eq!(tree.leaf(7), None);
    assert_eq!(tree.followpos(7), None);
    assert_eq!(tree.nodes().count(), 12);
    assert_eq!(tree.nodes().last(), Some(tree.root()));
    assert_eq!(
        tree.leaves()
            .map(|leaf| leaf.position().unwrap())
            .collect::<Vec<_>>(),
        (1..=6).collect::<Vec<_>>()
    );

    assert_eq!(SyntaxTree::new("ab.")?.end_marker(), None);
    assert_eq!(SyntaxTree::new(r"a\#.")?.leaf_count(), 2);
    Ok(())
}

#[test]
fn test_escaped_end_marker_syntax_tree() -> Result<()> {
    let tree = SyntaxTree::new(r"a\#.")?;
    assert_eq!(tree.leaf(2).map(|leaf| leaf.symbol()), Some('#'));
    assert_eq!(tree.end_marker(), None);

    let tree = SyntaxTree::new(r"\##.")?;
    assert_eq!(tree.end_marker(), Some(2));
    assert!(!tree.leaf(1).unwrap().is_end_marker());
    Ok(())
}

#[test]
fn test_escaped_end_marker_language_syntax_tree() {
    // a#, then the end of the expression
    assert_language(r"a\#.#.", &["a#"], &["a", "", "a##"]);
}

#[test]
fn test_long_expression_syntax_tree() -> Result<()> {
    let expression = format!("a{}#.", "b.".repeat(100_000));
    let tree = SyntaxTree::new(&expression)?;
    assert_eq!(tree.leaf_count(), 100_002);
    assert_eq!(tree.end_marker(), Some(100_002));
    assert_eq!(tree.start_positions(), &set(&[1]));
    assert_eq!(tree.followpos(100_001), Some(&set(&[100_002])));

    let copy = tree.clone();
    assert_eq!(copy, tree);
    drop(copy);

    let stars = SyntaxTree::new(&format!("a{}#.", "*".repeat(200_000)))?;
    assert_eq!(stars.followpos(1), Some(&set(&[1, 2])));
    let input = format!("a{}", "b".repeat(100_000));
    assert_language(&expression, &[input.as_str()], &["ab", &input[1..]]);
    Ok(())
}

#[test]
fn test_shared_read_only_syntax_tree() -> Result<()> {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SyntaxTree>();

    let tree = std::sync::Arc::new(SyntaxTree::new("ab|*a.b.b.#.")?);
    let handles: Vec<_> = (1..=tree.leaf_count())
        .map(|position| {
            let tree = std::sync::Arc::clone(&tree);
            std::thread::spawn(move || tree.followpos(position).map(PositionSet::len))
        })
        .collect();
    let sizes: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(sizes, vec![Some(3), Some(3), Some(1), Some(1), Some(1), Some(0)]);
    Ok(())
}

#[test]
fn test_dragon_book_language_syntax_tree() {
    // (a|b)*abb#
    assert_language(
        "ab|*a.b.b.#.",
        &["abb", "aabb", "babb", "ababb", "bbbabb"],
        &["", "ab", "abba", "abab", "abbc"],
    );
}

#[test]
fn test_optional_language_syntax_tree() {
    // a?b#
    assert_language("a?b.#.", &["b", "ab"], &["", "a", "aab", "abb"]);
    // (a|b)?c#
    assert_language("ab|?c.#.", &["c", "ac", "bc"], &["abc", "", "cc"]);
}

#[test]
fn test_repetition_language_syntax_tree() {
    // (a|b)+c#
    assert_language("ab|+c.#.", &["ac", "bc", "abbac"], &["c", "", "aca"]);
    // a*b*#
    assert_language("a*b*.#.", &["", "a", "b", "aab", "abbb"], &["ba", "aba"]);
    // \*+#
    assert_language(r"\*+#.", &["*", "***"], &["", "*a"]);
}
