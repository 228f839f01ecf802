//! AST node model.
//!
//! A sum type whose variants correspond directly to the grammar's node
//! kinds and child shapes, rather than a discriminant-plus-union: there is
//! no way to read a `left`/`right` pair that doesn't belong to the node's
//! actual kind.

use rlx_lex::{Token, TypeTag};

/// A single AST node: its defining token, whether it was produced inside
/// parentheses (relevant only to expression nodes; see `fix_precedence`),
/// and its kind-specific payload.
#[derive(Debug)]
pub struct Node<'a> {
    pub token: Token<'a>,
    pub enclosed_in_parens: bool,
    pub payload: NodePayload<'a>,
}

impl<'a> Node<'a> {
    pub fn new(token: Token<'a>, payload: NodePayload<'a>) -> Self {
        Self {
            token,
            enclosed_in_parens: false,
            payload,
        }
    }

    pub fn parenthesized(mut self) -> Self {
        self.enclosed_in_parens = true;
        self
    }

    /// The type tag the resolver assigned to this node's defining token,
    /// or `None` before resolution has run.
    pub fn resolved_type(&self) -> Option<TypeTag> {
        self.token.resolved_type.get()
    }

    /// Stamps a resolved type onto this node's token. Takes `&self`, not
    /// `&mut self`, so the resolver can run over shared references to the
    /// tree (see `Token::resolved_type`).
    pub fn set_resolved_type(&self, tag: TypeTag) {
        self.token.resolved_type.set(Some(tag));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Gt,
}

impl BinOp {
    /// Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Lt | BinOp::Gt => 1,
            BinOp::Add | BinOp::Sub => 2,
            BinOp::Mul | BinOp::Div | BinOp::Mod => 3,
        }
    }

    pub fn from_kind(kind: rlx_lex::TokenKind) -> Option<BinOp> {
        use rlx_lex::TokenKind::*;
        match kind {
            Plus => Some(BinOp::Add),
            Minus => Some(BinOp::Sub),
            Star => Some(BinOp::Mul),
            Slash => Some(BinOp::Div),
            Percent => Some(BinOp::Mod),
            Less => Some(BinOp::Lt),
            Greater => Some(BinOp::Gt),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum NodePayload<'a> {
    // Leaves.
    Identifier,
    Int,
    Float,
    String,
    Comment,
    StmtEnd,
    Eof,

    /// The `call` keyword wrapping a `FunctionCall` node.
    CallOperator { call: Box<Node<'a>> },

    /// `+ - * / % < >`.
    Binary {
        op: BinOp,
        left: Box<Node<'a>>,
        right: Box<Node<'a>>,
    },

    /// `name = expr`.
    ValueAssign { left: Box<Node<'a>>, right: Box<Node<'a>> },

    /// `name : type?`. `right` is `None` when the type is to be
    /// auto-deduced.
    TypeAssign {
        left: Box<Node<'a>>,
        right: Option<Box<Node<'a>>>,
    },

    /// `TypeAssign : initializer`, i.e. a constant binding.
    ConstAssign {
        left: Box<Node<'a>>,
        right: Box<Node<'a>>,
    },

    /// left = condition, right = body.
    While { condition: Box<Node<'a>>, body: Box<Node<'a>> },

    /// left = callee identifier, right = `ParameterList` of arguments.
    FunctionCall { callee: Box<Node<'a>>, args: Box<Node<'a>> },

    If {
        condition: Box<Node<'a>>,
        then_branch: Box<Node<'a>>,
        else_branch: Option<Box<Node<'a>>>,
    },

    FunctionDeclaration {
        params: Box<Node<'a>>,
        return_type: Box<Node<'a>>,
        body: Box<Node<'a>>,
    },

    Scope { statements: Vec<Node<'a>> },

    ParameterList { items: Vec<Node<'a>> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_ordering() {
        assert!(BinOp::Mul.precedence() > BinOp::Add.precedence());
        assert!(BinOp::Add.precedence() > BinOp::Lt.precedence());
        assert_eq!(BinOp::Add.precedence(), BinOp::Sub.precedence());
        assert_eq!(BinOp::Mul.precedence(), BinOp::Div.precedence());
        assert_eq!(BinOp::Div.precedence(), BinOp::Mod.precedence());
    }

    #[test]
    fn from_kind_recognizes_all_seven_operators() {
        use rlx_lex::TokenKind;
        assert_eq!(BinOp::from_kind(TokenKind::Plus), Some(BinOp::Add));
        assert_eq!(BinOp::from_kind(TokenKind::Minus), Some(BinOp::Sub));
        assert_eq!(BinOp::from_kind(TokenKind::Star), Some(BinOp::Mul));
        assert_eq!(BinOp::from_kind(TokenKind::Slash), Some(BinOp::Div));
        assert_eq!(BinOp::from_kind(TokenKind::Percent), Some(BinOp::Mod));
        assert_eq!(BinOp::from_kind(TokenKind::Less), Some(BinOp::Lt));
        assert_eq!(BinOp::from_kind(TokenKind::Greater), Some(BinOp::Gt));
        assert_eq!(BinOp::from_kind(TokenKind::Equals), None);
    }
}
