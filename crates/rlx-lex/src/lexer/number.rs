//! Integer and float literal scanning.

use rlx_util::Location;

use crate::token::{LiteralValue, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self, start: usize, loc: Location) -> Token<'a> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let is_float =
            self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit();
        if is_float {
            self.cursor.advance(); // '.'
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(start);
        if is_float {
            let value: f64 = text.parse().expect("scanned float literal must parse");
            Token::new(TokenKind::FloatLiteral, text, loc).with_literal(LiteralValue::Float(value))
        } else {
            // Saturates rather than panics: "one or more digits" makes an
            // arbitrarily long run of them syntactically valid input, and a
            // 25-digit literal would otherwise overflow `u64`.
            let value: u64 = text.parse().unwrap_or(u64::MAX);
            Token::new(TokenKind::IntegerLiteral, text, loc)
                .with_literal(LiteralValue::UInt(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{LiteralValue, TokenKind};
    use crate::Lexer;

    #[test]
    fn integer_literal() {
        let tok = Lexer::new("t.rlx", "12345;").next();
        assert_eq!(tok.kind, TokenKind::IntegerLiteral);
        assert_eq!(tok.text, "12345");
        assert_eq!(tok.literal, LiteralValue::UInt(12345));
    }

    #[test]
    fn float_literal() {
        let tok = Lexer::new("t.rlx", "3.14;").next();
        assert_eq!(tok.kind, TokenKind::FloatLiteral);
        assert_eq!(tok.text, "3.14");
        assert_eq!(tok.literal, LiteralValue::Float(3.14));
    }

    #[test]
    fn oversized_integer_literal_saturates_instead_of_panicking() {
        let tok = Lexer::new("t.rlx", "99999999999999999999999999;").next();
        assert_eq!(tok.kind, TokenKind::IntegerLiteral);
        assert_eq!(tok.literal, LiteralValue::UInt(u64::MAX));
    }

    #[test]
    fn integer_stops_before_non_digit() {
        let mut lexer = Lexer::new("t.rlx", "5,6");
        let tok = lexer.next();
        assert_eq!(tok.kind, TokenKind::IntegerLiteral);
        assert_eq!(tok.text, "5");
        assert_eq!(lexer.next().kind, TokenKind::Comma);
    }
}
