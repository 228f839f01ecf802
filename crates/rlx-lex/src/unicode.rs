//! ASCII character classification for identifiers and digits.
//!
//! Rouleaux identifiers are ASCII-only: no Unicode identifier support is
//! provided, unlike `faxc-lex`'s `is_ident_start`/`is_ident_continue` pair,
//! which also accepted Unicode letters and marks.

/// `[A-Za-z_]`
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// `[A-Za-z_0-9]`
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
