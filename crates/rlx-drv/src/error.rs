//! The driver's own error kind, plus the `#[from]` glue that lets `?`
//! unify it with every phase's error type at the point where `main`
//! needs a single `Result`.

use std::path::PathBuf;

use rlx_util::Location;
use thiserror::Error;

/// Errors that originate in the driver itself, rather than in one of the
/// three compilation phases.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The driver's top-level error, composing its own [`DriverError`] with
/// each phase's error enum via `#[from]` — the same one-error-enum-per-crate,
/// composed-at-the-boundary pattern `faxc-drv` uses for its own
/// `CompileError`.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Driver(#[from] DriverError),
    #[error(transparent)]
    Lex(#[from] rlx_lex::LexError),
    #[error(transparent)]
    Parse(#[from] rlx_par::ParseError),
    #[error(transparent)]
    Semantic(#[from] rlx_sem::SemanticError),
}

impl CompileError {
    /// Where to point the `Diagnostic` underline, if this error has a
    /// source location at all — `DriverError::Io` doesn't, since the file
    /// it names never made it into a `SourceFile`.
    pub fn location(&self) -> Option<&Location> {
        match self {
            CompileError::Driver(_) => None,
            CompileError::Lex(e) => Some(e.location()),
            CompileError::Parse(e) => Some(e.location()),
            CompileError::Semantic(e) => Some(e.location()),
        }
    }

    /// Length of the offending token, for the diagnostic underline.
    /// `ParseError::Unexpected` reports the found token's text, so its
    /// length is exact; the other parse variants and `Lex` name a single
    /// delimiter or position rather than a token, so `1` is the honest
    /// answer there.
    pub fn token_len(&self) -> usize {
        match self {
            CompileError::Driver(_) => 1,
            CompileError::Lex(_) => 1,
            CompileError::Parse(rlx_par::ParseError::Unexpected { found, .. }) => found.len().max(1),
            CompileError::Parse(_) => 1,
            CompileError::Semantic(e) => e.token_len(),
        }
    }
}

pub type CompileResult<T> = std::result::Result<T, CompileError>;
