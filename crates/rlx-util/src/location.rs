//! Source locations.

use std::fmt;
use std::rc::Rc;

/// A 1-based row/column position within a named source file.
///
/// Rouleaux compiles one file at a time, so unlike the multi-file
/// `SourceMap`/`FileId` pair this is modeled on, a `Location` carries its
/// file name directly rather than an indirection through a file table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub file: Rc<str>,
    pub row: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: Rc<str>, row: u32, column: u32) -> Self {
        Self { file, row, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let loc = Location::new(Rc::from("main.rlx"), 3, 7);
        assert_eq!(loc.to_string(), "main.rlx:3:7");
    }

    #[test]
    fn equality_ignores_nothing() {
        let a = Location::new(Rc::from("a.rlx"), 1, 1);
        let b = Location::new(Rc::from("a.rlx"), 1, 1);
        let c = Location::new(Rc::from("a.rlx"), 1, 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
