//! A single package line and its annotation block.

use super::{is_package_line, LIST_MARKER};

/// One package line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    index: usize,
    raw_line: String,
    indent_len: usize,
    name_start: usize,
    name_end: usize,
}

impl PackageEntry {
    /// Parse line `index`; `None` if it is not a package line.
    pub fn parse(index: usize, line: &str) -> Option<Self> {
        if !is_package_line(line) {
            return None;
        }
        let indent_len = line.len() - line.trim_start().len();
        let name_start = line.find(LIST_MARKER)? + LIST_MARKER.len();
        let name_end = name_start + line[name_start..].trim_end().len();
        Some(Self {
            index,
            raw_line: line.to_string(),
            indent_len,
            name_start,
            name_end,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Leading whitespace before the list marker.
    pub fn indent(&self) -> &str {
        &self.raw_line[..self.indent_len]
    }

    /// Token after the list marker, as written (quotes included).
    pub fn package_name(&self) -> &str {
        &self.raw_line[self.name_start..self.name_end]
    }

    /// Name handed to the package manager: one layer of matching quotes removed.
    pub fn query_name(&self) -> &str {
        let name = self.package_name();
        for quote in ['"', '\''] {
            if name.len() >= 2 && name.starts_with(quote) && name.ends_with(quote) {
                return name[1..name.len() - 1].trim();
            }
        }
        name
    }

    /// Width of the comment's padding: two less than the text before the first
    /// double quote, or 0 when the line has no quote.
    pub fn comment_padding(&self) -> usize {
        self.raw_line
            .find('"')
            .map(|quote| self.raw_line[..quote].chars().count().saturating_sub(2))
            .unwrap_or(0)
    }

    /// Comment line with `homepage`, followed by the original line.
    pub fn annotate(&self, homepage: &str) -> String {
        let eol = if self.raw_line.ends_with('\r') { "\r" } else { "" };
        format!(
            "{}# {}{}\n{}",
            " ".repeat(self.comment_padding()),
            homepage.trim(),
            eol,
            self.raw_line
        )
    }
}
