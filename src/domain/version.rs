use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Three-part numeric release version (major.minor.patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string such as "1.2.3".
    ///
    /// Exactly three dot-separated components are required and each must be a
    /// run of ASCII digits. The input is not trimmed: callers extracting a
    /// version from a larger text must hand over the isolated token.
    ///
    /// # Example
    /// ```
    /// # use pyrelease::domain::Version;
    /// assert_eq!(Version::parse("1.2.3").unwrap(), Version::new(1, 2, 3));
    /// assert!(Version::parse("1.2").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseError::malformed_version(format!(
                "'{}' - expected X.Y.Z",
                text
            )));
        }

        let major = parse_component(text, "major", parts[0])?;
        let minor = parse_component(text, "minor", parts[1])?;
        let patch = parse_component(text, "patch", parts[2])?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Return the next patch release, leaving major and minor untouched.
    pub fn bump_patch(&self) -> Result<Self> {
        let patch = self
            .patch
            .checked_add(1)
            .ok_or_else(|| ReleaseError::overflow(format!("cannot bump patch of {}", self)))?;

        Ok(Version {
            major: self.major,
            minor: self.minor,
            patch,
        })
    }

    pub fn to_semver(&self) -> semver::Version {
        semver::Version::new(self.major, self.minor, self.patch)
    }
}

/// Check a version string supplied verbatim by the operator.
///
/// Any non-numeric label such as `1.0.0rc1` is allowed, but the string must
/// be non-empty and free of whitespace, double quotes and parentheses: it
/// ends up inside the `__version__` string literal and the changelog header
/// `{version} ({date})`, both of which must stay recognisable.
pub fn check_version_label(text: &str) -> Result<&str> {
    if text.is_empty() {
        return Err(ReleaseError::malformed_version("version is empty"));
    }

    if let Some(c) = text
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '"' | '(' | ')'))
    {
        return Err(ReleaseError::malformed_version(format!(
            "'{}' - character {:?} is not allowed in a version",
            text, c
        )));
    }

    Ok(text)
}

// u64::from_str accepts a leading '+', so digits are checked first.
fn parse_component(text: &str, name: &str, part: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseError::malformed_version(format!(
            "'{}' - invalid {} component '{}'",
            text, name, part
        )));
    }

    part.parse::<u64>().map_err(|_| {
        ReleaseError::malformed_version(format!(
            "'{}' - {} component '{}' is out of range",
            text, name, part
        ))
    })
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
