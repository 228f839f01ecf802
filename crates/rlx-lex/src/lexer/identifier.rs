//! Identifier and keyword scanning.

use rlx_util::Location;

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ascii_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self, start: usize, loc: Location) -> Token<'a> {
        while is_ascii_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, loc)
    }
}

#[cfg(test)]
mod tests {
    use crate::Lexer;
    use crate::token::TokenKind;

    fn lex_one(source: &str) -> crate::token::Token<'_> {
        Lexer::new("t.rlx", source).next()
    }

    #[test]
    fn plain_identifier() {
        let tok = lex_one("foo_bar1");
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "foo_bar1");
    }

    #[test]
    fn keyword_for() {
        assert_eq!(lex_one("for").kind, TokenKind::KwFor);
    }

    #[test]
    fn keyword_while() {
        assert_eq!(lex_one("while").kind, TokenKind::KwWhile);
    }

    #[test]
    fn keyword_do() {
        assert_eq!(lex_one("do").kind, TokenKind::KwDo);
    }

    #[test]
    fn keyword_if() {
        assert_eq!(lex_one("if").kind, TokenKind::KwIf);
    }

    #[test]
    fn keyword_else() {
        assert_eq!(lex_one("else").kind, TokenKind::KwElse);
    }

    #[test]
    fn keyword_null() {
        assert_eq!(lex_one("null").kind, TokenKind::KwNull);
    }

    #[test]
    fn keyword_call() {
        assert_eq!(lex_one("call").kind, TokenKind::KwCall);
    }

    #[test]
    fn identifier_prefixed_by_keyword_text_is_not_a_keyword() {
        assert_eq!(lex_one("calling").kind, TokenKind::Identifier);
        assert_eq!(lex_one("iffy").kind, TokenKind::Identifier);
    }

    #[test]
    fn leading_underscore_identifier() {
        let tok = lex_one("_hidden");
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "_hidden");
    }
}
