//! `expr = primary { binop expr }`, with precedence enforced by rotating
//! the right-leaning spine the recursion naturally builds.

use rlx_lex::TokenKind;

use crate::ast::{BinOp, Node, NodePayload};
use crate::error::{ParseError, ParseResult};

use super::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn expr(&mut self) -> ParseResult<Node<'a>> {
        let left = self.primary()?;
        self.expr_continuation(left)
    }

    /// Attaches a trailing `binop expr` to `left`, if one is present, and
    /// rotates the resulting subtree into precedence order.
    fn expr_continuation(&mut self, left: Node<'a>) -> ParseResult<Node<'a>> {
        let tok = self.peek_token()?;
        let Some(op) = BinOp::from_kind(tok.kind) else {
            return Ok(left);
        };
        let op_tok = self.bump();
        let right = self.expr()?;
        let root = Node::new(
            op_tok,
            NodePayload::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        );
        Ok(fix_precedence(root))
    }

    /// `primary = '(' expr ')' | IDENT [ callArgs ] | INT | FLOAT | STRING`
    pub(crate) fn primary(&mut self) -> ParseResult<Node<'a>> {
        let tok = self.peek_token()?;
        match tok.kind {
            TokenKind::LParen => {
                let lparen = self.bump();
                let inner = self.expr()?;
                self.expect_closing(TokenKind::RParen, "(", &lparen)?;
                Ok(inner.parenthesized())
            }
            TokenKind::Identifier => {
                let ident = self.bump();
                if self.peek_kind()? == TokenKind::LParen {
                    let args = self.call_args()?;
                    let ident_tok = ident.clone();
                    let callee = Node::new(ident, NodePayload::Identifier);
                    Ok(Node::new(
                        ident_tok,
                        NodePayload::FunctionCall {
                            callee: Box::new(callee),
                            args: Box::new(args),
                        },
                    ))
                } else {
                    Ok(Node::new(ident, NodePayload::Identifier))
                }
            }
            TokenKind::IntegerLiteral => {
                let tok = self.bump();
                Ok(Node::new(tok, NodePayload::Int))
            }
            TokenKind::FloatLiteral => {
                let tok = self.bump();
                Ok(Node::new(tok, NodePayload::Float))
            }
            TokenKind::StringLiteral => {
                let tok = self.bump();
                Ok(Node::new(tok, NodePayload::String))
            }
            _ => Err(ParseError::Unexpected {
                expected: "the start of an expression",
                found: tok.text.to_string(),
                location: tok.location,
            }),
        }
    }

    /// `callStmt`'s and a call-expression's shared `IDENT callArgs` shape.
    pub(crate) fn function_call(&mut self) -> ParseResult<Node<'a>> {
        let ident = self.expect(TokenKind::Identifier, "function name")?;
        let callee_tok = ident.clone();
        let callee = Node::new(ident, NodePayload::Identifier);
        let args = self.call_args()?;
        Ok(Node::new(
            callee_tok,
            NodePayload::FunctionCall {
                callee: Box::new(callee),
                args: Box::new(args),
            },
        ))
    }

    /// `callArgs = '(' [ expr { ',' expr } ] ')'`
    pub(crate) fn call_args(&mut self) -> ParseResult<Node<'a>> {
        let lparen = self.expect(TokenKind::LParen, "'('")?;
        let mut items = Vec::new();
        if self.peek_kind()? != TokenKind::RParen {
            items.push(self.expr()?);
            while self.peek_kind()? == TokenKind::Comma {
                self.bump();
                items.push(self.expr()?);
            }
        }
        let rparen = self.expect_closing(TokenKind::RParen, "(", &lparen)?;
        Ok(Node::new(rparen, NodePayload::ParameterList { items }))
    }
}

/// Implements the precedence-fixing rotation: given `R = (L op_R C)` where
/// `C = (X op_C Y)`, rotate to `(L op_R X) op_C Y` when `C` is a binary
/// node, isn't sealed by parentheses, and either `R` is itself sealed or
/// `op_R` binds tighter than `op_C`.
fn fix_precedence(root: Node<'_>) -> Node<'_> {
    let Node {
        token: r_token,
        enclosed_in_parens: r_parens,
        payload,
    } = root;
    let NodePayload::Binary {
        op: op_r,
        left,
        right,
    } = payload
    else {
        unreachable!("fix_precedence is only called on freshly built Binary nodes")
    };

    let c = *right;
    if c.enclosed_in_parens {
        return rebuild_binary(r_token, r_parens, op_r, left, Box::new(c));
    }

    match c.payload {
        NodePayload::Binary {
            op: op_c,
            left: x,
            right: y,
        } if r_parens || op_r.precedence() > op_c.precedence() => {
            let new_left = rebuild_binary(r_token, r_parens, op_r, left, x);
            rebuild_binary(c.token, c.enclosed_in_parens, op_c, Box::new(new_left), y)
        }
        other => rebuild_binary(
            r_token,
            r_parens,
            op_r,
            left,
            Box::new(Node {
                token: c.token,
                enclosed_in_parens: c.enclosed_in_parens,
                payload: other,
            }),
        ),
    }
}

fn rebuild_binary<'a>(
    token: rlx_lex::Token<'a>,
    enclosed_in_parens: bool,
    op: BinOp,
    left: Box<Node<'a>>,
    right: Box<Node<'a>>,
) -> Node<'a> {
    Node {
        token,
        enclosed_in_parens,
        payload: NodePayload::Binary { op, left, right },
    }
}
