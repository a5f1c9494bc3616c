//! Line-oriented package list documents.
//!
//! A document is split on `\n` and kept verbatim. Lines whose trimmed content
//! starts with the list marker are package lines; everything else passes
//! through untouched when the document is rendered back out.

mod entry;

pub use entry::PackageEntry;

use std::collections::BTreeMap;

/// Prefix (after trimming) that marks a package line.
pub const LIST_MARKER: &str = "- ";

/// True if `line` is a package line.
pub fn is_package_line(line: &str) -> bool {
    line.trim().starts_with(LIST_MARKER)
}

/// Input document: ordered lines, exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Package entries in document order, each carrying its line index.
    pub fn package_entries(&self) -> Vec<PackageEntry> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| PackageEntry::parse(index, line))
            .collect()
    }

    /// Rebuild the document, substituting `replacements` by line index.
    ///
    /// Lines without a replacement are kept verbatim. The joined result is
    /// trimmed of leading and trailing whitespace.
    pub fn render(&self, replacements: &BTreeMap<usize, String>) -> String {
        let out: Vec<&str> = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                replacements
                    .get(&index)
                    .map(String::as_str)
                    .unwrap_or(line.as_str())
            })
            .collect();
        out.join("\n").trim().to_string()
    }
}
