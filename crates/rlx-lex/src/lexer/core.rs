//! Core lexer: the peek/put-back token stream and top-level dispatch.

use std::collections::VecDeque;
use std::rc::Rc;

use rlx_util::Location;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// A lazy, restartable stream of tokens over a byte buffer.
///
/// `next()` consumes the next token; `peek()` inspects it without consuming;
/// `put_back()` pushes a token so that the following `next()` returns it.
/// The peek buffer is a double-ended queue: `peek` consults its front,
/// `put_back` inserts at its front, and tokens produced by scanning ahead
/// during a `peek()` go onto the back.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    file: Rc<str>,
    queue: VecDeque<Token<'a>>,
    error: Option<LexError>,
}

impl<'a> Lexer<'a> {
    pub fn new(file: impl Into<Rc<str>>, source: &'a str) -> Self {
        let file = file.into();
        tracing::debug!(target: "lexer", file = %file, bytes = source.len(), "lexer created");
        Self {
            cursor: Cursor::new(source),
            file,
            queue: VecDeque::new(),
            error: None,
        }
    }

    /// Consumes and returns the next token.
    pub fn next(&mut self) -> Token<'a> {
        if let Some(tok) = self.queue.pop_front() {
            return tok;
        }
        self.scan_token()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Token<'a> {
        if self.queue.is_empty() {
            let tok = self.scan_token();
            self.queue.push_back(tok);
        }
        self.queue.front().cloned().expect("just pushed a token")
    }

    /// Pushes `token` so that the following `next()` returns it.
    pub fn put_back(&mut self, token: Token<'a>) {
        self.queue.push_front(token);
    }

    /// Takes the first lexical error encountered, if any.
    pub fn take_error(&mut self) -> Option<LexError> {
        self.error.take()
    }

    pub(crate) fn set_error(&mut self, error: LexError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub(crate) fn location(&self) -> Location {
        Location::new(self.file.clone(), self.cursor.line(), self.cursor.column())
    }

    fn skip_whitespace(&mut self) {
        while matches!(
            self.cursor.current_char(),
            ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C'
        ) {
            self.cursor.advance();
        }
    }

    fn scan_token(&mut self) -> Token<'a> {
        let tok = self.scan_token_inner();
        tracing::trace!(target: "lexer", kind = ?tok.kind, text = tok.text, location = %tok.location, "token produced");
        tok
    }

    fn scan_token_inner(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let start = self.cursor.position();
        let loc = self.location();

        if self.cursor.is_at_end() {
            return Token::new(TokenKind::Eof, "", loc);
        }

        let c = self.cursor.current_char();
        if crate::unicode::is_ascii_ident_start(c) {
            return self.lex_identifier(start, loc);
        }
        if c.is_ascii_digit() {
            return self.lex_number(start, loc);
        }

        match c {
            '"' => self.lex_string(start, loc),
            '/' if self.cursor.peek_char(1) == '/' => self.lex_line_comment(start, loc),
            '/' if self.cursor.peek_char(1) == '*' => self.lex_block_comment(start, loc),
            '-' if self.cursor.peek_char(1) == '>' => {
                self.cursor.advance();
                self.cursor.advance();
                Token::new(TokenKind::Arrow, self.cursor.slice_from(start), loc)
            }
            '(' | ')' | '{' | '}' | ',' | ';' | ':' | '=' | '+' | '-' | '*' | '/' | '%' | '<'
            | '>' | '!' | '#' | '$' | '&' | '\'' | '.' | '?' | '@' | '[' | '\\' | ']' | '^'
            | '`' | '|' | '~' => {
                self.cursor.advance();
                let kind = punctuation_kind(c);
                Token::new(kind, self.cursor.slice_from(start), loc)
            }
            other => {
                self.cursor.advance();
                let byte = other as u32 as u8;
                self.set_error(LexError::InvalidByte {
                    byte,
                    location: loc.clone(),
                });
                Token::new(TokenKind::Invalid, self.cursor.slice_from(start), loc)
            }
        }
    }
}

fn punctuation_kind(c: char) -> TokenKind {
    match c {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '=' => TokenKind::Equals,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Percent,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        '!' => TokenKind::Bang,
        '#' => TokenKind::Hash,
        '$' => TokenKind::Dollar,
        '&' => TokenKind::Amp,
        '\'' => TokenKind::SQuote,
        '.' => TokenKind::Dot,
        '?' => TokenKind::Question,
        '@' => TokenKind::At,
        '[' => TokenKind::LBracket,
        '\\' => TokenKind::Backslash,
        ']' => TokenKind::RBracket,
        '^' => TokenKind::Caret,
        '`' => TokenKind::Backtick,
        '|' => TokenKind::Pipe,
        '~' => TokenKind::Tilde,
        _ => unreachable!("punctuation_kind called with non-punctuation char"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totality_reaches_eof_and_stays_there() {
        let mut lexer = Lexer::new("t.rlx", "x = 1;");
        let mut kinds = Vec::new();
        loop {
            let tok = lexer.next();
            let done = tok.kind == TokenKind::Eof;
            kinds.push(tok.kind);
            if done {
                break;
            }
        }
        assert_eq!(*kinds.last().unwrap(), TokenKind::Eof);
        assert_eq!(lexer.next().kind, TokenKind::Eof);
    }

    #[test]
    fn peek_then_next_are_equal() {
        let mut lexer = Lexer::new("t.rlx", "call foo();");
        let peeked = lexer.peek();
        let next = lexer.next();
        assert_eq!(peeked, next);
    }

    #[test]
    fn put_back_is_involution() {
        let mut lexer = Lexer::new("t.rlx", "x + y");
        let t = lexer.next();
        lexer.put_back(t.clone());
        assert_eq!(lexer.next(), t);
    }

    #[test]
    fn put_back_order_is_reversed_on_next() {
        let mut lexer = Lexer::new("t.rlx", "a b c");
        let a = lexer.next();
        let b = lexer.next();
        lexer.put_back(b.clone());
        lexer.put_back(a.clone());
        assert_eq!(lexer.next(), a);
        assert_eq!(lexer.next(), b);
    }

    #[test]
    fn punctuation_kind_equals_ascii_code() {
        let mut lexer = Lexer::new("t.rlx", "+");
        let tok = lexer.next();
        assert_eq!(tok.kind as i32, b'+' as i32);
    }

    #[test]
    fn arrow_fuses_minus_greater() {
        let mut lexer = Lexer::new("t.rlx", "->");
        let tok = lexer.next();
        assert_eq!(tok.kind, TokenKind::Arrow);
        assert_eq!(tok.text, "->");
    }

    #[test]
    fn invalid_byte_sets_error() {
        let mut lexer = Lexer::new("t.rlx", "\x01");
        let tok = lexer.next();
        assert_eq!(tok.kind, TokenKind::Invalid);
        assert!(lexer.take_error().is_some());
    }

    #[test]
    fn every_remaining_ascii_punctuation_byte_is_its_own_token() {
        for c in "!#$&'.?@[\\]^`|~".chars() {
            let src = c.to_string();
            let mut lexer = Lexer::new("t.rlx", &src);
            let tok = lexer.next();
            assert_eq!(tok.kind as i32, c as i32, "byte {c:?} should lex as itself");
            assert!(lexer.take_error().is_none(), "byte {c:?} should not be an error");
        }
    }
}
