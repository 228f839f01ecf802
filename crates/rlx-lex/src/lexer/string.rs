//! String literal scanning. No escape sequences are recognized.

use rlx_util::Location;

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_string(&mut self, start: usize, loc: Location) -> Token<'a> {
        self.cursor.advance(); // opening '"'
        loop {
            if self.cursor.is_at_end() {
                self.set_error(LexError::UnterminatedString {
                    location: loc.clone(),
                });
                return Token::new(TokenKind::Invalid, self.cursor.slice_from(start), loc);
            }
            if self.cursor.current_char() == '"' {
                self.cursor.advance();
                return Token::new(TokenKind::StringLiteral, self.cursor.slice_from(start), loc);
            }
            self.cursor.advance();
        }
    }
}
