//! Line and block comment scanning. Comments are produced as tokens (they
//! are part of the `statement` production), not silently skipped.

use rlx_util::Location;

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_line_comment(&mut self, start: usize, loc: Location) -> Token<'a> {
        self.cursor.advance(); // first '/'
        self.cursor.advance(); // second '/'
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        Token::new(TokenKind::LineComment, self.cursor.slice_from(start), loc)
    }

    pub(crate) fn lex_block_comment(&mut self, start: usize, loc: Location) -> Token<'a> {
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        loop {
            if self.cursor.is_at_end() {
                self.set_error(LexError::UnterminatedBlockComment {
                    location: loc.clone(),
                });
                return Token::new(TokenKind::Invalid, self.cursor.slice_from(start), loc);
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Token::new(TokenKind::BlockComment, self.cursor.slice_from(start), loc);
            }
            self.cursor.advance();
        }
    }
}
