//! Lexical error type.

use rlx_util::Location;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { location: Location },

    #[error("unterminated block comment")]
    UnterminatedBlockComment { location: Location },

    #[error("unexpected byte {byte:#04x}")]
    InvalidByte { byte: u8, location: Location },
}

impl LexError {
    pub fn location(&self) -> &Location {
        match self {
            LexError::UnterminatedString { location }
            | LexError::UnterminatedBlockComment { location }
            | LexError::InvalidByte { location, .. } => location,
        }
    }
}

pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn unterminated_string_display() {
        let loc = Location::new(Rc::from("a.rlx"), 1, 1);
        let err = LexError::UnterminatedString {
            location: loc.clone(),
        };
        assert_eq!(err.to_string(), "unterminated string literal");
        assert_eq!(err.location(), &loc);
    }

    #[test]
    fn invalid_byte_display() {
        let loc = Location::new(Rc::from("a.rlx"), 1, 1);
        let err = LexError::InvalidByte {
            byte: 0x01,
            location: loc,
        };
        assert_eq!(err.to_string(), "unexpected byte 0x01");
    }
}
