use std::collections::HashMap;

/// External packaging steps run at the end of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStep {
    Build,
    Upload,
}

impl ReleaseStep {
    /// Get the step name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ReleaseStep::Build => "build",
            ReleaseStep::Upload => "upload",
        }
    }
}

/// Release information handed to build and upload commands
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseContext {
    /// Version being released
    pub version: String,
    /// Version declared before this release
    pub previous_version: String,
    /// Tag created for the release
    pub tag: String,
}

impl ReleaseContext {
    /// Convert context to environment variables for the command
    ///
    /// Maps context fields to PYRELEASE_* environment variables
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();

        env.insert("PYRELEASE_VERSION".to_string(), self.version.clone());
        env.insert(
            "PYRELEASE_PREVIOUS_VERSION".to_string(),
            self.previous_version.clone(),
        );
        env.insert("PYRELEASE_TAG".to_string(), self.tag.clone());

        env
    }
}
