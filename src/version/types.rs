//! The structured version value

use crate::version::error::Result;
use crate::version::identifier::Identifier;

/// A Semantic Versioning 2.0.0 version.
///
/// Fields are public so callers can assemble a version directly. Such a value
/// is only trustworthy after [`Version::validate`]; values returned by
/// [`Version::parse`](crate::parse) are always valid.
///
/// Equality, hashing and ordering follow precedence and therefore ignore
/// `build`: `1.0.0+a == 1.0.0+b`.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release identifiers, in precedence order
    pub pre: Vec<Identifier>,
    /// Build-metadata identifiers, kept for formatting only
    pub build: Vec<Identifier>,
}

impl Version {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: Vec::new(),
        }
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Check every identifier invariant.
    ///
    /// Pre-release identifiers are checked before build metadata, each in
    /// sequence order; the first violation is returned.
    pub fn validate(&self) -> Result<()> {
        self.pre.iter().try_for_each(Identifier::validate_pre)?;
        self.build.iter().try_for_each(Identifier::validate_build)
    }
}
