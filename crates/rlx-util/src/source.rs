//! A single loaded source file, with precomputed line starts for fast
//! offset-to-location conversion and source-line extraction.
//!
//! Adapted from `faxc_util::span::SourceFile`, trimmed from a multi-file
//! `SourceMap`/`FileId` registry down to the single file this front end
//! ever has open at a time.

use std::rc::Rc;

use crate::error::{UtilError, UtilResult};

pub struct SourceFile {
    name: Rc<str>,
    content: Rc<str>,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<Rc<str>>, content: impl Into<Rc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Vec<usize> {
        let mut starts = vec![0];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                starts.push(i + 1);
            }
        }
        starts
    }

    pub fn name(&self) -> Rc<str> {
        self.name.clone()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a 0-based byte offset into a 1-based (row, column) pair.
    pub fn offset_to_line_col(&self, offset: usize) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point - 1,
        };
        let line_start = self.line_starts[line];
        let column = (offset - line_start + 1) as u32;
        (line as u32 + 1, column)
    }

    /// Returns the full text of a 1-based line number, without its
    /// trailing newline.
    pub fn line(&self, row: u32) -> UtilResult<&str> {
        let index = row as usize - 1;
        let start = *self.line_starts.get(index).ok_or(UtilError::LineOutOfBounds {
            line: row as usize,
            max_lines: self.line_count(),
        })?;
        let end = self
            .line_starts
            .get(index + 1)
            .map(|&s| s - 1)
            .unwrap_or(self.content.len());
        Ok(self.content[start..end].trim_end_matches('\r'))
    }
}
