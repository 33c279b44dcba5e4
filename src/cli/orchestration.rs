//! Main release workflow
//!
//! Keeps the release sequence apart from CLI argument parsing. Collaborators
//! (git, packaging tools, operator prompts) are passed in as trait objects so
//! the workflow can be called programmatically or driven by mocks.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::boundary::{check_requested_version, BoundaryWarning};
use crate::config::Config;
use crate::domain::changelog::add_changelog_entry;
use crate::domain::version::check_version_label;
use crate::domain::version_file::{read_version_file, update_version_file};
use crate::domain::Version;
use crate::error::ReleaseError;
use crate::git::VersionControl;
use crate::tools::{Packager, ReleaseContext};
use crate::ui::{self, Prompt, ReleasePlan};

/// Arguments for the release workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Explicit new version; the current version is patch-bumped when unset
    pub new_version: Option<String>,

    /// Changelog description; prompted for when unset
    pub description: Option<String>,

    /// Overrides `version-file` from the configuration
    pub version_file: Option<PathBuf>,

    /// Overrides `changelog-file` from the configuration
    pub changelog_file: Option<PathBuf>,

    /// Overrides `remote` from the configuration
    pub remote: Option<String>,

    /// Overrides `branch` from the configuration
    pub branch: Option<String>,

    /// Push without asking
    pub push: bool,

    /// Answer yes to every confirmation
    pub yes: bool,

    /// Show the plan only
    pub dry_run: bool,

    pub skip_build: bool,

    pub skip_upload: bool,
}

/// Result of a completed release
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub previous_version: String,
    pub version: String,
    pub tag: String,
    /// Whether the commit and tag were pushed
    pub pushed: bool,
    /// Whether the artifact was uploaded
    pub uploaded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    Released(WorkflowResult),
    DryRun(ReleasePlan),
    Cancelled,
}

/// Main release workflow
///
/// 1. Resolve the version and changelog files
/// 2. Work out the new version and the changelog description
/// 3. Fail fast on a dirty working tree
/// 4. Update the version file and the changelog
/// 5. Commit, tag and optionally push
/// 6. Build and upload the distribution
///
/// Any error aborts the sequence. Steps already completed (for example the
/// commit and tag) are left in place.
pub fn run_release_workflow(
    args: &ReleaseWorkflowArgs,
    config: &Config,
    vcs: &dyn VersionControl,
    packager: &dyn Packager,
    prompt: &dyn Prompt,
    today: NaiveDate,
) -> Result<WorkflowOutcome> {
    let interactive = !args.yes && !args.dry_run;

    let version_file = resolve_file(
        args.version_file.as_ref().or(config.version_file.as_ref()),
        "version file",
        "version-file",
    )?;
    let changelog_file = resolve_file(
        args.changelog_file.as_ref().or(config.changelog_file.as_ref()),
        "changelog file",
        "changelog-file",
    )?;

    let previous_version = read_version_file(&version_file)?;

    let version = match &args.new_version {
        Some(requested) => {
            check_version_label(requested)?;
            if let Some(warning) = check_requested_version(&previous_version, requested) {
                if !confirm_warning(&warning, interactive, prompt)? {
                    return Ok(WorkflowOutcome::Cancelled);
                }
            }
            requested.clone()
        }
        None => Version::parse(&previous_version)
            .and_then(|current| current.bump_patch())
            .with_context(|| {
                format!(
                    "cannot bump version '{}' from {}",
                    previous_version,
                    version_file.display()
                )
            })?
            .to_string(),
    };
    tracing::debug!(from = %previous_version, to = %version, "resolved release version");

    let description = match ui::clean_description(args.description.as_deref()) {
        Some(description) => description,
        None if args.dry_run => String::new(),
        None => prompt.read_description()?.trim().to_string(),
    };
    if description.is_empty() && !args.dry_run {
        let warning = BoundaryWarning::EmptyDescription {
            version: version.clone(),
        };
        if !confirm_warning(&warning, interactive, prompt)? {
            return Ok(WorkflowOutcome::Cancelled);
        }
    }

    if !vcs.is_tree_clean()? {
        return Err(ReleaseError::DirtyWorkingTree.into());
    }

    let remote = args.remote.clone().unwrap_or_else(|| config.remote.clone());
    let tag = config.tag_for(&version);

    if args.dry_run {
        let plan = ReleasePlan {
            previous_version,
            version,
            version_file: version_file.display().to_string(),
            changelog_file: changelog_file.display().to_string(),
            tag,
            remote,
            build: !args.skip_build,
            upload: !args.skip_upload,
        };
        ui::display_status("Dry run, nothing will be changed:");
        ui::display_release_plan(&plan);
        return Ok(WorkflowOutcome::DryRun(plan));
    }

    update_version_file(&version_file, &version)
        .with_context(|| format!("failed to update {}", version_file.display()))?;
    ui::display_success(&format!(
        "Updated {} to {}",
        version_file.display(),
        version
    ));

    add_changelog_entry(&changelog_file, &version, today, &description)
        .with_context(|| format!("failed to update {}", changelog_file.display()))?;
    ui::display_success(&format!("Added changelog entry to {}", changelog_file.display()));

    vcs.commit_all(&config.commit_message_for(&version))
        .context("Error committing changes")?;
    ui::display_success(&format!("Committed release {}", version));

    vcs.create_tag(&tag).context("Error tagging release")?;
    ui::display_success(&format!("Created tag: {}", tag));

    let branch = match args.branch.clone().or_else(|| config.branch.clone()) {
        Some(branch) => branch,
        None => vcs.default_branch(&remote)?,
    };

    let should_push = args.push
        || args.yes
        || prompt.confirm(&format!(
            "Push the release commit and tag to {}/{}?",
            remote, branch
        ))?;

    if should_push {
        ui::display_status(&format!("Pushing changes to {}/{}", remote, branch));
        vcs.push_branch(&remote, &branch)
            .context("Error pushing changes to git")?;
        vcs.push_tags(&remote, &[tag.as_str()])
            .context("Error pushing tags to git")?;
        ui::display_success(&format!("Pushed {} and {} to {}", branch, tag, remote));
    } else {
        ui::display_manual_push_instruction(&remote, &branch, &tag);
    }

    let context = ReleaseContext {
        version: version.clone(),
        previous_version: previous_version.clone(),
        tag: tag.clone(),
    };

    if !args.skip_build {
        ui::display_status("Building distribution");
        packager.build(&context).context("Error building distribution")?;
    }

    if !args.skip_upload {
        ui::display_status("Uploading distribution");
        packager.upload(&context).context("Error publishing distribution")?;
    }

    Ok(WorkflowOutcome::Released(WorkflowResult {
        previous_version,
        version,
        tag,
        pushed: should_push,
        uploaded: !args.skip_upload,
    }))
}

fn resolve_file(path: Option<&PathBuf>, what: &str, key: &str) -> Result<PathBuf> {
    let path = path.ok_or_else(|| {
        ReleaseError::config(format!(
            "no {} given; pass it on the command line or set '{}' in the configuration",
            what, key
        ))
    })?;

    if !Path::new(path).exists() {
        return Err(ReleaseError::config(format!(
            "Specified {} ({}) does not exist",
            what,
            path.display()
        ))
        .into());
    }

    Ok(path.clone())
}

fn confirm_warning(warning: &BoundaryWarning, interactive: bool, prompt: &dyn Prompt) -> Result<bool> {
    ui::display_boundary_warning(warning);

    if !interactive {
        return Ok(true);
    }

    prompt.confirm("Continue with the release?")
}
