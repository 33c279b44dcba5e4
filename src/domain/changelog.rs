//! Changelog splicing
//!
//! A changelog is treated as two blocks: a preamble (title, description) and
//! a tail that starts at the first line looking like an entry header,
//! `<token> (<parenthetical>)`. New entries are inserted between the two.
//! Historical entries are never parsed individually.
//!
//! The header test is purely syntactic. A preamble line such as
//! `See (details)` matches it and is treated as the start of the entries
//! block, so a new entry would be inserted above it.

use crate::error::Result;
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn entry_header() -> &'static Regex {
    static ENTRY_HEADER: OnceLock<Regex> = OnceLock::new();
    ENTRY_HEADER
        .get_or_init(|| Regex::new(r"^(\S+) \(([^)]+)\)$").expect("entry header pattern is valid"))
}

/// Returns true when `line` has the shape of an entry header.
pub fn is_entry_header(line: &str) -> bool {
    entry_header().is_match(line)
}

/// A new changelog entry to be rendered at the top of the entries block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub version: String,
    pub date: NaiveDate,
    pub body: String,
}

impl ChangelogEntry {
    pub fn new(version: impl Into<String>, date: NaiveDate, body: impl Into<String>) -> Self {
        ChangelogEntry {
            version: version.into(),
            date,
            body: body.into(),
        }
    }

    /// Header line, e.g. `0.1.0 (2024-05-01)`
    pub fn header(&self) -> String {
        format!("{} ({})", self.version, self.date.format("%Y-%m-%d"))
    }

    /// Render the header, a dashed underline of the same length, and the
    /// trimmed body.
    pub fn render(&self) -> String {
        let header = self.header();
        let underline = "-".repeat(header.chars().count());
        format!("{}\n{}\n{}", header, underline, self.body.trim())
    }
}

/// Changelog split into preamble and the opaque block of existing entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    /// Trimmed lines before the first entry header
    pub preamble: Vec<String>,
    /// Trimmed lines from the first entry header to the end of the document
    pub tail: Vec<String>,
}

impl ChangelogDocument {
    /// Split `text` at the first line matching the entry header pattern.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(|line| line.trim().to_string()).collect();

        let split_at = lines
            .iter()
            .position(|line| is_entry_header(line))
            .unwrap_or(lines.len());

        let mut preamble = lines;
        let tail = preamble.split_off(split_at);

        ChangelogDocument { preamble, tail }
    }

    pub fn has_entries(&self) -> bool {
        !self.tail.is_empty()
    }

    /// Render the document with `entry` placed between the preamble and the
    /// existing entries, one blank line on each side.
    pub fn render_with(&self, entry: &ChangelogEntry) -> String {
        let head = self.preamble.join("\n");
        let tail = self.tail.join("\n");
        let text = format!("{}\n\n{}\n\n{}", head.trim(), entry.render(), tail);
        text.trim().to_string()
    }
}

/// Insert a new entry into the changelog text and return the new text.
///
/// # Example
/// ```
/// # use chrono::NaiveDate;
/// # use pyrelease::domain::changelog::insert_entry;
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let text = insert_entry("# Changelog", "0.1.0", date, "Initial release");
/// assert_eq!(text, "# Changelog\n\n0.1.0 (2024-05-01)\n------------------\nInitial release");
/// ```
pub fn insert_entry(document_text: &str, new_version: &str, date: NaiveDate, message: &str) -> String {
    let document = ChangelogDocument::parse(document_text);
    let entry = ChangelogEntry::new(new_version, date, message);
    document.render_with(&entry)
}

/// Read the changelog at `path`, insert the entry and write the file back.
pub fn add_changelog_entry(
    path: impl AsRef<Path>,
    new_version: &str,
    date: NaiveDate,
    message: &str,
) -> Result<()> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let document = ChangelogDocument::parse(&contents);
    let entry = ChangelogEntry::new(new_version, date, message);
    fs::write(path, document.render_with(&entry))?;

    tracing::debug!(
        path = %path.display(),
        version = new_version,
        first_entry = !document.has_entries(),
        "added changelog entry"
    );
    Ok(())
}
