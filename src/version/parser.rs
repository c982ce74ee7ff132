//! Version string parsing
//!
//! Grammar: `MAJOR.MINOR.PATCH[-PRE][+BUILD]`
//! - build metadata starts at the first `+`
//! - pre-release starts at the first `-` before that
//! - the core is exactly three digit-only components without leading zeros

use std::str::FromStr;

use tracing::{debug, trace};

use crate::version::error::{Error, Result};
use crate::version::identifier::{Identifier, is_all_digits, parse_numeric};
use crate::version::types::Version;

/// Parse a version string.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "1.2.3-alpha.1+123.456" -> pre [alpha, 1], build [123, 456]
/// - "01.1.1" -> Err(LeadingZero)
/// - "1.1.1-alpha+" -> Err(MalformedVersion)
pub fn parse(input: &str) -> Result<Version> {
    parse_version(input)
        .inspect(|version| trace!("Parsed version '{}': {:?}", input, version))
        .inspect_err(|e| debug!("Rejected version '{}': {}", input, e))
}

fn parse_version(input: &str) -> Result<Version> {
    let (head, build) = match input.split_once('+') {
        Some((head, build)) => (head, Some(build)),
        None => (input, None),
    };
    let (core, pre) = match head.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (head, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return Err(malformed(input));
    };

    Ok(Version {
        major: parse_core_number(input, major)?,
        minor: parse_core_number(input, minor)?,
        patch: parse_core_number(input, patch)?,
        pre: parse_identifiers(input, pre, Identifier::new)?,
        build: parse_identifiers(input, build, Identifier::new_build)?,
    })
}

fn parse_core_number(input: &str, token: &str) -> Result<u64> {
    if !is_all_digits(token) {
        return Err(malformed(input));
    }
    parse_numeric(token)
}

/// Split a dotted section into identifiers. A present but empty section, or
/// an empty component, is malformed.
fn parse_identifiers(
    input: &str,
    section: Option<&str>,
    make: fn(&str) -> Result<Identifier>,
) -> Result<Vec<Identifier>> {
    let Some(section) = section else {
        return Ok(Vec::new());
    };
    section
        .split('.')
        .map(|token| {
            if token.is_empty() {
                Err(malformed(input))
            } else {
                make(token)
            }
        })
        .collect()
}

fn malformed(input: &str) -> Error {
    Error::MalformedVersion(input.to_string())
}

impl Version {
    /// Parse a version string. See [`parse`].
    pub fn parse(input: &str) -> Result<Self> {
        parse(input)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        parse(value)
    }
}
