//! Resolver diagnostics. Every variant's message text and attachment point
//! (which token a diagnostic's location/underline comes from) is ported
//! verbatim from the corresponding `typing_result_error` call in
//! `type_info.c`'s `resolve_types`.
//!
//! A few of the original's error paths are not reachable from a correctly
//! built symbol table (a failed allocation, or a just-inserted symbol that
//! can't be found again) — those don't have variants here, since nothing
//! in this table can fail that way.

use rlx_util::Location;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SemanticError {
    #[error("Left and right operand types do not match!")]
    OperandTypeMismatch { location: Location, token_len: usize },

    #[error("Unknown type '{name}' being used in variable declaration")]
    UnknownType {
        name: String,
        location: Location,
        token_len: usize,
    },

    #[error("A variable with the name '{name}' already exists! It was declared here [{declared_at}]")]
    AlreadyDeclaredExplicit {
        name: String,
        declared_at: Location,
        location: Location,
        token_len: usize,
    },

    #[error("A variable named '{name}' already exists! The original was declared here [{declared_at}]")]
    AlreadyDeclaredInferred {
        name: String,
        declared_at: Location,
        location: Location,
        token_len: usize,
    },

    #[error("Undeclared symbol '{name}'")]
    UndeclaredSymbol {
        name: String,
        location: Location,
        token_len: usize,
    },

    #[error(
        "Cannot assign to variable '{name}' because it was defined as a constant. Original declaration was made here [{declared_at}]"
    )]
    AssignToConstant {
        name: String,
        declared_at: Location,
        location: Location,
        token_len: usize,
    },

    #[error("Type mismatch: the type of '{name}' does not match that of the assigned expression.")]
    ReassignTypeMismatch {
        name: String,
        location: Location,
        token_len: usize,
    },

    /// Shared by `VALUE_ASSIGN`'s explicit-type initializer mismatch and
    /// `CONST_ASSIGN`'s known-type check — the const form reuses this
    /// check rather than silently falling through without one.
    #[error("Attempting to assign incorrect type to variable '{name}'")]
    DeclarationTypeMismatch {
        name: String,
        location: Location,
        token_len: usize,
    },

    #[error("Unexpected token to the left of const-assignment operator!")]
    BadConstAssignTarget { location: Location, token_len: usize },

    #[error("Cannot call something that is not a function")]
    NotAFunction { location: Location, token_len: usize },

    #[error("Too few parameters for function call, got {got}, but expected {expected}")]
    TooFewArguments {
        got: usize,
        expected: usize,
        location: Location,
        token_len: usize,
    },

    #[error("Too many parameters for function call, got {got}, but expected {expected}")]
    TooManyArguments {
        got: usize,
        expected: usize,
        location: Location,
        token_len: usize,
    },

    #[error("Parameter's type does not match that of function declaration")]
    ArgumentTypeMismatch { location: Location, token_len: usize },
}

impl SemanticError {
    pub fn location(&self) -> &Location {
        match self {
            SemanticError::OperandTypeMismatch { location, .. }
            | SemanticError::UnknownType { location, .. }
            | SemanticError::AlreadyDeclaredExplicit { location, .. }
            | SemanticError::AlreadyDeclaredInferred { location, .. }
            | SemanticError::UndeclaredSymbol { location, .. }
            | SemanticError::AssignToConstant { location, .. }
            | SemanticError::ReassignTypeMismatch { location, .. }
            | SemanticError::DeclarationTypeMismatch { location, .. }
            | SemanticError::BadConstAssignTarget { location, .. }
            | SemanticError::NotAFunction { location, .. }
            | SemanticError::TooFewArguments { location, .. }
            | SemanticError::TooManyArguments { location, .. }
            | SemanticError::ArgumentTypeMismatch { location, .. } => location,
        }
    }

    pub fn token_len(&self) -> usize {
        match self {
            SemanticError::OperandTypeMismatch { token_len, .. }
            | SemanticError::UnknownType { token_len, .. }
            | SemanticError::AlreadyDeclaredExplicit { token_len, .. }
            | SemanticError::AlreadyDeclaredInferred { token_len, .. }
            | SemanticError::UndeclaredSymbol { token_len, .. }
            | SemanticError::AssignToConstant { token_len, .. }
            | SemanticError::ReassignTypeMismatch { token_len, .. }
            | SemanticError::DeclarationTypeMismatch { token_len, .. }
            | SemanticError::BadConstAssignTarget { token_len, .. }
            | SemanticError::NotAFunction { token_len, .. }
            | SemanticError::TooFewArguments { token_len, .. }
            | SemanticError::TooManyArguments { token_len, .. }
            | SemanticError::ArgumentTypeMismatch { token_len, .. } => *token_len,
        }
    }
}

pub type SemanticResult<T> = std::result::Result<T, SemanticError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn loc() -> Location {
        Location::new(Rc::from("t.rlx"), 1, 1)
    }

    #[test]
    fn undeclared_symbol_display() {
        let err = SemanticError::UndeclaredSymbol {
            name: "x".to_string(),
            location: loc(),
            token_len: 1,
        };
        assert_eq!(err.to_string(), "Undeclared symbol 'x'");
        assert_eq!(err.token_len(), 1);
    }

    #[test]
    fn already_declared_messages_differ_by_source() {
        let explicit = SemanticError::AlreadyDeclaredExplicit {
            name: "x".to_string(),
            declared_at: loc(),
            location: loc(),
            token_len: 1,
        };
        let inferred = SemanticError::AlreadyDeclaredInferred {
            name: "x".to_string(),
            declared_at: loc(),
            location: loc(),
            token_len: 1,
        };
        assert!(explicit.to_string().contains("with the name"));
        assert!(inferred.to_string().contains("already exists! The original"));
    }
}
