//! rlx-lex - the Rouleaux lexer.
//!
//! Produces a lazy, restartable stream of [`Token`]s from a byte buffer,
//! with unbounded put-back. See [`Lexer`] for the public contract
//! (`next`/`peek`/`put_back`).

pub mod cursor;
pub mod error;
mod lexer;
pub mod token;
pub mod unicode;

pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, LiteralValue, Token, TokenKind, TypeTag};
