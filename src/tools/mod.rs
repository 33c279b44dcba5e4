//! Packaging tools run after the release is committed and tagged
//!
//! - build: produce the distribution artifact (default `python setup.py clean bdist_wheel`)
//! - upload: publish it to a package index (default `twine upload dist/*`)

pub mod executor;
pub mod step;

pub use executor::CommandExecutor;
pub use step::{ReleaseContext, ReleaseStep};

use crate::config::Config;
use crate::error::Result;

/// Builds and uploads a release artifact
pub trait Packager {
    fn build(&self, context: &ReleaseContext) -> Result<()>;

    fn upload(&self, context: &ReleaseContext) -> Result<()>;
}

/// Packager running the build and upload commands from the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CommandPackager {
    pub build_command: Vec<String>,
    pub upload_command: Vec<String>,
}

impl CommandPackager {
    pub fn from_config(config: &Config) -> Self {
        CommandPackager {
            build_command: config.build_command.clone(),
            upload_command: config.upload_command.clone(),
        }
    }
}

impl Packager for CommandPackager {
    fn build(&self, context: &ReleaseContext) -> Result<()> {
        CommandExecutor::execute(ReleaseStep::Build, &self.build_command, context)
    }

    fn upload(&self, context: &ReleaseContext) -> Result<()> {
        CommandExecutor::execute(ReleaseStep::Upload, &self.upload_command, context)
    }
}
