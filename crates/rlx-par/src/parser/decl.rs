//! `declOrAssign = IDENT '=' expr ';' | IDENT ':' [ IDENT ] ( ':' | '=' ) funOrExpr ';'`

use rlx_lex::TokenKind;

use crate::ast::{Node, NodePayload};
use crate::error::{ParseError, ParseResult};

use super::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn decl_or_assign(&mut self) -> ParseResult<Node<'a>> {
        let ident_tok = self.expect(TokenKind::Identifier, "identifier")?;
        let ident_node = Node::new(ident_tok, NodePayload::Identifier);

        let sep_tok = self.peek_token()?;
        match sep_tok.kind {
            TokenKind::Equals => {
                let eq = self.bump();
                let rhs = self.expr()?;
                self.expect_semicolon()?;
                Ok(Node::new(
                    eq,
                    NodePayload::ValueAssign {
                        left: Box::new(ident_node),
                        right: Box::new(rhs),
                    },
                ))
            }
            TokenKind::Colon => self.type_assign_then(ident_node),
            _ => Err(ParseError::Unexpected {
                expected: "'=' or ':'",
                found: sep_tok.text.to_string(),
                location: sep_tok.location,
            }),
        }
    }

    /// Parses the `':' [ IDENT ] ( ':' | '=' )` tail of a declaration and
    /// then the const/value assignment it introduces.
    fn type_assign_then(&mut self, ident_node: Node<'a>) -> ParseResult<Node<'a>> {
        let colon_tok = self.expect(TokenKind::Colon, "':'")?;

        let type_node = if self.peek_kind()? == TokenKind::Identifier {
            let ty = self.bump();
            Some(Box::new(Node::new(ty, NodePayload::Identifier)))
        } else {
            None
        };

        let type_assign = Node::new(
            colon_tok,
            NodePayload::TypeAssign {
                left: Box::new(ident_node),
                right: type_node,
            },
        );

        let sep_tok = self.peek_token()?;
        match sep_tok.kind {
            TokenKind::Colon => {
                let colon = self.bump();
                let rhs = self.fun_or_expr()?;
                self.expect_semicolon()?;
                Ok(Node::new(
                    colon,
                    NodePayload::ConstAssign {
                        left: Box::new(type_assign),
                        right: Box::new(rhs),
                    },
                ))
            }
            TokenKind::Equals => {
                let eq = self.bump();
                let rhs = self.fun_or_expr()?;
                self.expect_semicolon()?;
                Ok(Node::new(
                    eq,
                    NodePayload::ValueAssign {
                        left: Box::new(type_assign),
                        right: Box::new(rhs),
                    },
                ))
            }
            _ => Err(ParseError::Unexpected {
                expected: "':' (constant) or '=' (variable)",
                found: sep_tok.text.to_string(),
                location: sep_tok.location,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rlx_lex::Lexer;

    use crate::ast::NodePayload;
    use crate::parser::Parser;

    fn parse_stmt(src: &str) -> crate::ast::Node<'_> {
        let mut parser = Parser::new(Lexer::new("t.rlx", src));
        parser.statement().unwrap()
    }

    #[test]
    fn value_assign() {
        let node = parse_stmt("x = 1;");
        assert!(matches!(node.payload, NodePayload::ValueAssign { .. }));
    }

    #[test]
    fn auto_deduced_variable() {
        let node = parse_stmt("x := 1;");
        match node.payload {
            NodePayload::ValueAssign { left, .. } => match left.payload {
                NodePayload::TypeAssign { right, .. } => assert!(right.is_none()),
                _ => panic!("expected type-assign left"),
            },
            _ => panic!("expected value-assign"),
        }
    }

    #[test]
    fn explicitly_typed_constant() {
        let node = parse_stmt("x : int : 1;");
        match node.payload {
            NodePayload::ConstAssign { left, .. } => match left.payload {
                NodePayload::TypeAssign { right, .. } => {
                    let ty = right.expect("explicit type");
                    assert_eq!(ty.token.text, "int");
                }
                _ => panic!("expected type-assign left"),
            },
            _ => panic!("expected const-assign"),
        }
    }

    #[test]
    fn missing_assign_operator_is_an_error() {
        let mut parser = Parser::new(Lexer::new("t.rlx", "x 1;"));
        assert!(parser.statement().is_err());
    }
}
