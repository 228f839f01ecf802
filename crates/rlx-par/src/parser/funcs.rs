//! `funOrExpr = funDecl | expr`, `funDecl = '(' [ param { ',' param } ] ')'
//! '->' IDENT statement`, and the bounded-lookahead disambiguation that
//! tells them apart.

use rlx_lex::TokenKind;

use crate::ast::{Node, NodePayload};
use crate::error::ParseResult;

use super::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn fun_or_expr(&mut self) -> ParseResult<Node<'a>> {
        if self.peek_kind()? == TokenKind::LParen && self.looks_like_fun_decl()? {
            self.fun_decl()
        } else {
            self.expr()
        }
    }

    /// Peeks past a `(` to decide whether it opens a function literal's
    /// parameter list or a parenthesized expression, restoring every token
    /// it looked at via `put_back` (in reverse order of consumption) before
    /// returning.
    fn looks_like_fun_decl(&mut self) -> ParseResult<bool> {
        let lparen = self.bump();
        debug_assert_eq!(lparen.kind, TokenKind::LParen);

        let after_paren = self.peek_token()?;
        if after_paren.kind == TokenKind::RParen {
            self.lexer.put_back(lparen);
            return Ok(true);
        }
        if after_paren.kind != TokenKind::Identifier {
            self.lexer.put_back(lparen);
            return Ok(false);
        }

        let ident = self.bump();
        let after_ident = self.peek_token()?;
        let is_fun_decl = after_ident.kind == TokenKind::Colon;

        self.lexer.put_back(ident);
        self.lexer.put_back(lparen);
        Ok(is_fun_decl)
    }

    fn fun_decl(&mut self) -> ParseResult<Node<'a>> {
        let lparen = self.expect(TokenKind::LParen, "'('")?;
        let mut params = Vec::new();
        if self.peek_kind()? != TokenKind::RParen {
            params.push(self.param()?);
            while self.peek_kind()? == TokenKind::Comma {
                self.bump();
                params.push(self.param()?);
            }
        }
        self.expect_closing(TokenKind::RParen, "(", &lparen)?;
        let arrow = self.expect(TokenKind::Arrow, "'->'")?;
        let return_type_tok = self.expect(TokenKind::Identifier, "a return type")?;
        let return_type = Node::new(return_type_tok, NodePayload::Identifier);
        let body = self.statement()?;
        Ok(Node::new(
            arrow,
            NodePayload::FunctionDeclaration {
                params: Box::new(Node::new(lparen, NodePayload::ParameterList { items: params })),
                return_type: Box::new(return_type),
                body: Box::new(body),
            },
        ))
    }

    /// `param = IDENT ':' IDENT`, modeled as a `TypeAssign` node — the same
    /// shape a `declOrAssign`'s explicit type annotation uses.
    fn param(&mut self) -> ParseResult<Node<'a>> {
        let name = self.expect(TokenKind::Identifier, "a parameter name")?;
        let colon = self.expect(TokenKind::Colon, "':'")?;
        let ty = self.expect(TokenKind::Identifier, "a parameter type")?;
        Ok(Node::new(
            colon,
            NodePayload::TypeAssign {
                left: Box::new(Node::new(name, NodePayload::Identifier)),
                right: Some(Box::new(Node::new(ty, NodePayload::Identifier))),
            },
        ))
    }
}
