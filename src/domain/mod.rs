//! Domain logic - pure text transformations independent of git and tools

pub mod changelog;
pub mod version;
pub mod version_file;

pub use changelog::{ChangelogDocument, ChangelogEntry};
pub use version::Version;
