//! Canonical string rendering

use std::fmt::{self, Write};

use crate::version::identifier::Identifier;
use crate::version::types::Version;

/// Render a version in canonical form, the exact inverse of parsing.
pub fn format(version: &Version) -> String {
    version.to_string()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            f.write_char('-')?;
            write_dotted(f, &self.pre)?;
        }
        if !self.build.is_empty() {
            f.write_char('+')?;
            write_dotted(f, &self.build)?;
        }
        Ok(())
    }
}

fn write_dotted(f: &mut fmt::Formatter<'_>, identifiers: &[Identifier]) -> fmt::Result {
    for (i, identifier) in identifiers.iter().enumerate() {
        if i > 0 {
            f.write_char('.')?;
        }
        write!(f, "{}", identifier)?;
    }
    Ok(())
}
