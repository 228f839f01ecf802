//! Diagnostic reporting.
//!
//! Unlike `faxc-util`'s multi-severity, code-registry `Diagnostic`/`Handler`
//! pair (errors, warnings, notes, helps, `DiagnosticCode`), Rouleaux aborts
//! the compilation at the first error: no attempt at error recovery is
//! made, so the `Handler` here holds at most one diagnostic.
//!
//! # Examples
//!
//! ```
//! use rlx_util::{Handler, Location};
//! use std::rc::Rc;
//!
//! let mut handler = Handler::new();
//! let loc = Location::new(Rc::from("main.rlx"), 1, 1);
//! handler.report(loc, "undeclared symbol 'x'");
//! assert!(handler.has_error());
//! ```

use crate::location::Location;
use crate::source::SourceFile;
use std::fmt;

/// A single compiler error: where it happened and what went wrong.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    /// Renders this diagnostic in the reproduction-critical format:
    ///
    /// ```text
    /// Error @ [<file>:<row>:<col>]: <message>
    /// |
    /// |     <full source line>
    /// |_    <spaces><caret><tildes>
    /// ```
    ///
    /// `token_len` is the length in bytes of the offending token; the
    /// underline is one `^` followed by `token_len - 1` `~` characters.
    pub fn render(&self, source: &SourceFile, token_len: usize) -> String {
        let line = source.line(self.location.row).unwrap_or("");
        let col = self.location.column as usize;
        let indent = " ".repeat(col.saturating_sub(1));
        let underline_len = token_len.max(1);
        let underline = format!("^{}", "~".repeat(underline_len - 1));
        format!(
            "Error @ [{}]: {}\n|\n|     {}\n|_    {}{}",
            self.location, self.message, line, indent, underline
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error @ [{}]: {}", self.location, self.message)
    }
}

/// Collects at most the first diagnostic raised during a compilation.
///
/// Subsequent calls to [`Handler::report`] after the first are no-ops: the
/// first error encountered aborts the current phase.
#[derive(Default)]
pub struct Handler {
    diagnostic: Option<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self { diagnostic: None }
    }

    pub fn report(&mut self, location: Location, message: impl Into<String>) {
        if self.diagnostic.is_none() {
            self.diagnostic = Some(Diagnostic::new(location, message));
        }
    }

    pub fn has_error(&self) -> bool {
        self.diagnostic.is_some()
    }

    pub fn take(&mut self) -> Option<Diagnostic> {
        self.diagnostic.take()
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn handler_keeps_only_first_error() {
        let mut handler = Handler::new();
        let loc1 = Location::new(Rc::from("a.rlx"), 1, 1);
        let loc2 = Location::new(Rc::from("a.rlx"), 2, 1);
        handler.report(loc1, "first error");
        handler.report(loc2, "second error");
        assert_eq!(handler.diagnostic().unwrap().message, "first error");
    }

    #[test]
    fn render_matches_fixed_format() {
        let source = SourceFile::new("main.rlx", "x = 1;\n");
        let loc = Location::new(Rc::from("main.rlx"), 1, 1);
        let diag = Diagnostic::new(loc, "Undeclared symbol 'x'");
        let rendered = diag.render(&source, 1);
        assert_eq!(
            rendered,
            "Error @ [main.rlx:1:1]: Undeclared symbol 'x'\n|\n|     x = 1;\n|_    ^"
        );
    }

    #[test]
    fn render_underline_spans_token_length() {
        let source = SourceFile::new("main.rlx", "foo = 1;\n");
        let loc = Location::new(Rc::from("main.rlx"), 1, 1);
        let diag = Diagnostic::new(loc, "Undeclared symbol 'foo'");
        let rendered = diag.render(&source, 3);
        assert!(rendered.ends_with("^~~"));
    }
}
