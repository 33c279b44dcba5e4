pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_manual_push_instruction,
    display_release_plan, display_status, display_success, ReleasePlan,
};

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Operator interaction needed by a release
pub trait Prompt {
    /// Ask a yes/no question; anything but "y"/"yes" is a no
    fn confirm(&self, question: &str) -> Result<bool>;

    /// Read a multi-line changelog description
    fn read_description(&self) -> Result<String>;
}

/// Prompt reading answers from stdin
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        print!("\n{} [y/N]: ", question);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(parse_yes_no(&input))
    }

    fn read_description(&self) -> Result<String> {
        println!(
            "Enter a short description of the changes included in the release \
             to include in the changelog, and enter CTRL-D to finish"
        );

        read_until_eof(io::stdin().lock())
    }
}

/// Interprets a confirmation answer: "y" or "yes", any case, surrounding
/// whitespace ignored.
pub fn parse_yes_no(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Reads lines until EOF and joins them with newlines.
pub fn read_until_eof(reader: impl BufRead) -> Result<String> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(lines.join("\n"))
}

/// Trims a changelog description; `None` stays `None`.
pub fn clean_description(description: Option<&str>) -> Option<String> {
    description.map(|d| d.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("y"));
        assert!(parse_yes_no("Yes\n"));
        assert!(parse_yes_no("  YES  "));
        assert!(!parse_yes_no("n"));
        assert!(!parse_yes_no(""));
        assert!(!parse_yes_no("yep"));
    }

    #[test]
    fn test_read_until_eof() {
        let input = "First line\nSecond line\n".as_bytes();
        assert_eq!(read_until_eof(input).unwrap(), "First line\nSecond line");
    }

    #[test]
    fn test_read_until_eof_empty() {
        assert_eq!(read_until_eof("".as_bytes()).unwrap(), "");
    }

    #[test]
    fn test_clean_description() {
        assert_eq!(
            clean_description(Some("\n  Fixed things.\n\n")),
            Some("Fixed things.".to_string())
        );
        assert_eq!(clean_description(None), None);
    }
}
