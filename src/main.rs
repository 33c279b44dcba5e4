use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pyrelease::cli::{run_release_workflow, ReleaseWorkflowArgs, WorkflowOutcome};
use pyrelease::config;
use pyrelease::git::Git2Repository;
use pyrelease::logging;
use pyrelease::tools::CommandPackager;
use pyrelease::ui::{self, TerminalPrompt};

#[derive(clap::Parser)]
#[command(
    name = "pyrelease",
    version,
    about = "Bump the version, update the changelog, tag, push and publish a Python package"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        value_name = "VERSION",
        help = "New version number (default: bump the patch version)"
    )]
    new_version: Option<String>,

    #[arg(short, long, help = "Description of the work done in the release")]
    description: Option<String>,

    #[arg(short = 'f', long, help = "Python file containing the module version number")]
    version_file: Option<PathBuf>,

    #[arg(short = 'l', long, help = "Changelog file receiving the release entry")]
    changelog_file: Option<PathBuf>,

    #[arg(short, long, help = "Remote to push the release to")]
    remote: Option<String>,

    #[arg(short, long, help = "Branch to push the release commit to")]
    branch: Option<String>,

    #[arg(short, long, help = "Push the release commit and tag without asking")]
    push: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    yes: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Do not build the distribution")]
    skip_build: bool,

    #[arg(long, help = "Do not upload the distribution")]
    skip_upload: bool,

    #[arg(long, help = "Print debug logging to stderr")]
    verbose: bool,
}

impl From<Args> for ReleaseWorkflowArgs {
    fn from(args: Args) -> Self {
        ReleaseWorkflowArgs {
            new_version: args.new_version,
            description: args.description,
            version_file: args.version_file,
            changelog_file: args.changelog_file,
            remote: args.remote,
            branch: args.branch,
            push: args.push,
            yes: args.yes,
            dry_run: args.dry_run,
            skip_build: args.skip_build,
            skip_upload: args.skip_upload,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let packager = CommandPackager::from_config(&config);
    let today = chrono::Local::now().date_naive();
    let workflow_args = ReleaseWorkflowArgs::from(args);

    match run_release_workflow(
        &workflow_args,
        &config,
        &repo,
        &packager,
        &TerminalPrompt,
        today,
    ) {
        Ok(WorkflowOutcome::Released(result)) => {
            let published = if result.uploaded { "published" } else { "tagged" };
            println!(
                "\n{} Successfully {} release {} ({})\n",
                console::style("✓").green(),
                published,
                result.version,
                result.tag
            );
        }
        Ok(WorkflowOutcome::DryRun(_)) => {}
        Ok(WorkflowOutcome::Cancelled) => {
            println!("Release cancelled by user.");
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }

    Ok(())
}
