use rlx_util::Location;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected}, found '{found}'")]
    Unexpected {
        expected: &'static str,
        found: String,
        location: Location,
    },

    #[error("unclosed '{opener}' opened at {opener_location}")]
    UnclosedDelimiter {
        opener: &'static str,
        opener_location: Location,
        location: Location,
    },

    #[error("expected ';' after statement")]
    MissingSemicolon { location: Location },

    #[error("{message}")]
    Lex { message: String, location: Location },
}

impl ParseError {
    pub fn location(&self) -> &Location {
        match self {
            ParseError::Unexpected { location, .. } => location,
            ParseError::UnclosedDelimiter { location, .. } => location,
            ParseError::MissingSemicolon { location } => location,
            ParseError::Lex { location, .. } => location,
        }
    }
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn loc() -> Location {
        Location {
            file: Rc::from("t.rlx"),
            row: 1,
            column: 1,
        }
    }

    #[test]
    fn unexpected_display() {
        let err = ParseError::Unexpected {
            expected: "';'",
            found: "}".to_string(),
            location: loc(),
        };
        assert_eq!(err.to_string(), "expected ';', found '}'");
    }

    #[test]
    fn unclosed_delimiter_display() {
        let err = ParseError::UnclosedDelimiter {
            opener: "(",
            opener_location: loc(),
            location: loc(),
        };
        assert_eq!(err.to_string(), "unclosed '(' opened at t.rlx:1:1");
    }
}
