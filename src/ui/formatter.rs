//! Pure formatting functions for UI output.
//!
//! This module contains all display logic separated from user interaction.

use crate::boundary::BoundaryWarning;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Steps a release is about to perform, for display before anything runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    pub previous_version: String,
    pub version: String,
    pub version_file: String,
    pub changelog_file: String,
    pub tag: String,
    pub remote: String,
    pub build: bool,
    pub upload: bool,
}

impl ReleasePlan {
    /// One line per step, in execution order
    pub fn steps(&self) -> Vec<String> {
        let mut steps = vec![
            format!(
                "Update {} from {} to {}",
                self.version_file, self.previous_version, self.version
            ),
            format!("Add changelog entry for {} to {}", self.version, self.changelog_file),
            format!("Commit release changes for {}", self.version),
            format!("Create tag {}", self.tag),
            format!("Push commit and tag {} to {} (optional)", self.tag, self.remote),
        ];

        if self.build {
            steps.push("Build distribution".to_string());
        }
        if self.upload {
            steps.push("Upload distribution to the package index".to_string());
        }

        steps
    }
}

/// Display the release plan, e.g. for a dry run.
pub fn display_release_plan(plan: &ReleasePlan) {
    println!(
        "\n{}",
        style(format!("Release {} -> {}", plan.previous_version, plan.version)).bold()
    );
    for (i, step) in plan.steps().iter().enumerate() {
        println!("  Step {}: {}", i + 1, step);
    }
}

/// Display manual push instructions for a release that was not pushed.
///
/// # Arguments
/// * `remote` - The remote name (e.g., "origin")
/// * `branch` - The branch holding the release commit
/// * `tag` - The tag that was created locally
pub fn display_manual_push_instruction(remote: &str, branch: &str, tag: &str) {
    println!(
        "\n{} To push this release later, run:\n  {}\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, branch)).cyan(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}
