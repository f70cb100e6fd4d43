use super::{
    Error, Result,
    lexer::{Lexer, PosToken, Token},
    tree::{BinaryOp, Node, NodeId, Tree},
};

/// Builds the unannotated syntax tree of a postfix `expression`.
///
/// Operand tokens, including the `#` augmentation symbol, become leaves
/// numbered from 1 in order of appearance.
///
/// # Errors
///
/// If an operator lacks operands, if more than one subtree remains, or if an
/// unresolved grouping metacharacter is found, an [`Error`] is returned.
pub fn build(expression: &str) -> Result<Tree> {
    Builder::new(expression).build()
}

/// Reduces postfix tokens into subtrees on an explicit stack of subtree
/// roots. Nodes are appended to the arena as they are reduced.
struct Builder<'a> {
    lexer: Lexer<'a>,
    nodes: Vec<Node>,
    leaves: Vec<NodeId>,
    stack: Vec<NodeId>,
}

impl<'a> Builder<'a> {
    fn new(expression: &'a str) -> Self {
        Builder {
            lexer: Lexer::new(expression),
            nodes: Vec::new(),
            leaves: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn build(mut self) -> Result<Tree> {
        while let Some(token) = self.lexer.next_token()? {
            self.reduce(token)?;
        }

        let root = self.stack.pop().ok_or(Error::EmptyExpression)?;
        if !self.stack.is_empty() {
            return Err(Error::UnconsumedOperands {
                count: self.stack.len() + 1,
            });
        }

        log::debug!("built syntax tree with {} leaves", self.leaves.len());
        Ok(Tree::new(self.nodes, self.leaves, root))
    }

    fn reduce(&mut self, PosToken { pos, token }: PosToken) -> Result<()> {
        log::trace!("reducing {token:?} at {pos} (stack depth {})", self.stack.len());

        let node = match token {
            Token::Operand(c) | Token::EscapedOperand(c) => {
                Node::leaf(c, self.leaves.len() + 1)
            }
            Token::EndMarker => Node::end_marker(self.leaves.len() + 1),
            Token::Unary(op) => {
                let operand = self.pop(pos, op.symbol())?;
                Node::unary(op, operand)
            }
            Token::Binary(op) => self.binary(pos, op)?,
            Token::Grouping(lit) => {
                return Err(Error::UnresolvedMetacharacter { pos, lit });
            }
        };

        let id = NodeId(self.nodes.len());
        if node.is_leaf() {
            self.leaves.push(id);
        }
        self.nodes.push(node);
        self.stack.push(id);
        Ok(())
    }

    fn binary(&mut self, pos: usize, op: BinaryOp) -> Result<Node> {
        // The right operand was pushed last.
        let right = self.pop(pos, op.symbol())?;
        let left = self.pop(pos, op.symbol())?;
        Ok(Node::binary(op, left, right))
    }

    fn pop(&mut self, pos: usize, op: char) -> Result<NodeId> {
        self.stack.pop().ok_or(Error::MissingOperand { pos, op })
    }
}
