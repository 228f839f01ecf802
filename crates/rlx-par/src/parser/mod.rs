//! Recursive-descent parser over a [`rlx_lex::Lexer`] token stream.

mod decl;
mod expr;
mod funcs;

use rlx_lex::{Lexer, Token, TokenKind};

use crate::ast::{Node, NodePayload};
use crate::error::{ParseError, ParseResult};

/// Builds an AST from a [`Lexer`]. Holds the lexer directly rather than a
/// pre-tokenized buffer: `peek`/`put_back` on the lexer give the parser all
/// the lookahead its grammar needs.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    /// `file = { statement } EOF`. The collected statements (including the
    /// trailing `EOF` leaf) are returned as a `Scope` node rooted at the
    /// first token of the file.
    pub fn parse_file(mut self) -> ParseResult<Node<'a>> {
        let start = self.peek_token()?;
        let mut statements = Vec::new();
        loop {
            let tok = self.peek_token()?;
            if tok.kind == TokenKind::Eof {
                let eof = self.bump();
                tracing::debug!(target: "parser", kind = ?eof.kind, location = %eof.location, "end of file");
                statements.push(Node::new(eof, NodePayload::Eof));
                break;
            }
            let stmt = self.statement()?;
            tracing::debug!(
                target: "parser",
                location = %stmt.token.location,
                "parsed top-level statement"
            );
            statements.push(stmt);
        }
        Ok(Node::new(start, NodePayload::Scope { statements }))
    }

    pub(crate) fn statement(&mut self) -> ParseResult<Node<'a>> {
        let tok = self.peek_token()?;
        match tok.kind {
            TokenKind::KwCall => self.call_stmt(),
            TokenKind::KwIf => self.if_stmt(),
            TokenKind::KwWhile => self.while_stmt(),
            TokenKind::LBrace => self.block(),
            TokenKind::LineComment | TokenKind::BlockComment => {
                let tok = self.bump();
                Ok(Node::new(tok, NodePayload::Comment))
            }
            TokenKind::Identifier => self.decl_or_assign(),
            TokenKind::Eof => {
                let tok = self.bump();
                Ok(Node::new(tok, NodePayload::Eof))
            }
            _ => Err(ParseError::Unexpected {
                expected: "the start of a statement",
                found: tok.text.to_string(),
                location: tok.location.clone(),
            }),
        }
    }

    fn call_stmt(&mut self) -> ParseResult<Node<'a>> {
        let call_tok = self.expect(TokenKind::KwCall, "'call'")?;
        let call_node = self.function_call()?;
        self.expect_semicolon()?;
        Ok(Node::new(
            call_tok,
            NodePayload::CallOperator {
                call: Box::new(call_node),
            },
        ))
    }

    fn if_stmt(&mut self) -> ParseResult<Node<'a>> {
        let if_tok = self.expect(TokenKind::KwIf, "'if'")?;
        let condition = self.expr()?;
        let then_branch = self.statement()?;
        let else_branch = if self.peek_kind()? == TokenKind::KwElse {
            self.bump();
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Node::new(
            if_tok,
            NodePayload::If {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch,
            },
        ))
    }

    fn while_stmt(&mut self) -> ParseResult<Node<'a>> {
        let while_tok = self.expect(TokenKind::KwWhile, "'while'")?;
        let condition = self.expr()?;
        let body = self.statement()?;
        Ok(Node::new(
            while_tok,
            NodePayload::While {
                condition: Box::new(condition),
                body: Box::new(body),
            },
        ))
    }

    fn block(&mut self) -> ParseResult<Node<'a>> {
        let lbrace = self.expect(TokenKind::LBrace, "'{'")?;
        let mut statements = Vec::new();
        loop {
            let tok = self.peek_token()?;
            if tok.kind == TokenKind::RBrace {
                break;
            }
            if tok.kind == TokenKind::Eof {
                return Err(ParseError::UnclosedDelimiter {
                    opener: "{",
                    opener_location: lbrace.location.clone(),
                    location: tok.location.clone(),
                });
            }
            statements.push(self.statement()?);
        }
        self.bump(); // '}'
        Ok(Node::new(lbrace, NodePayload::Scope { statements }))
    }

    // --- shared primitives ---

    fn bump(&mut self) -> Token<'a> {
        self.lexer.next()
    }

    fn peek_token(&mut self) -> ParseResult<Token<'a>> {
        let tok = self.lexer.peek();
        self.check_lex_error(&tok)?;
        Ok(tok)
    }

    fn peek_kind(&mut self) -> ParseResult<TokenKind> {
        Ok(self.peek_token()?.kind)
    }

    fn check_lex_error(&mut self, tok: &Token<'a>) -> ParseResult<()> {
        if tok.kind == TokenKind::Invalid {
            if let Some(err) = self.lexer.take_error() {
                return Err(ParseError::Lex {
                    message: err.to_string(),
                    location: err.location().clone(),
                });
            }
        }
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<Token<'a>> {
        let tok = self.bump();
        self.check_lex_error(&tok)?;
        if tok.kind != kind {
            return Err(ParseError::Unexpected {
                expected,
                found: tok.text.to_string(),
                location: tok.location.clone(),
            });
        }
        Ok(tok)
    }

    fn expect_closing(
        &mut self,
        kind: TokenKind,
        opener: &'static str,
        opener_tok: &Token<'a>,
    ) -> ParseResult<Token<'a>> {
        let tok = self.bump();
        self.check_lex_error(&tok)?;
        if tok.kind != kind {
            return Err(ParseError::UnclosedDelimiter {
                opener,
                opener_location: opener_tok.location.clone(),
                location: tok.location.clone(),
            });
        }
        Ok(tok)
    }

    fn expect_semicolon(&mut self) -> ParseResult<Token<'a>> {
        let tok = self.bump();
        self.check_lex_error(&tok)?;
        if tok.kind != TokenKind::Semicolon {
            return Err(ParseError::MissingSemicolon {
                location: tok.location.clone(),
            });
        }
        Ok(tok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> ParseResult<Node<'_>> {
        Parser::new(Lexer::new("t.rlx", src)).parse_file()
    }

    #[test]
    fn empty_file_is_just_eof() {
        let node = parse("").unwrap();
        match node.payload {
            NodePayload::Scope { statements } => {
                assert_eq!(statements.len(), 1);
                assert!(matches!(statements[0].payload, NodePayload::Eof));
            }
            _ => panic!("expected scope"),
        }
    }

    #[test]
    fn block_reports_unclosed_delimiter() {
        let err = parse("{ x = 1;").unwrap_err();
        assert!(matches!(err, ParseError::UnclosedDelimiter { opener: "{", .. }));
    }

    #[test]
    fn missing_semicolon_is_reported() {
        let err = parse("x = 1").unwrap_err();
        assert!(matches!(err, ParseError::MissingSemicolon { .. }));
    }
}
