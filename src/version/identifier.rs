//! Dot-separated components of the pre-release and build-metadata sections
//!
//! Both sections share the character rule: non-empty, ASCII alphanumerics and
//! hyphens only. Pre-release components made up entirely of digits are numeric
//! and must not carry a leading zero. Build-metadata components are always
//! opaque text, so `007` is a valid build identifier but not a valid
//! pre-release identifier.

use std::fmt;

use crate::version::error::{Error, Result};

/// A single pre-release or build-metadata identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Alphanumeric identifier, ordered by ASCII text
    Text(String),
    /// All-digit pre-release identifier, ordered by value
    Numeric(u64),
}

impl Identifier {
    /// Build a pre-release identifier.
    ///
    /// All-digit input becomes [`Identifier::Numeric`]:
    /// - "alpha" -> Text("alpha")
    /// - "x-1" -> Text("x-1")
    /// - "123" -> Numeric(123)
    /// - "0" -> Numeric(0)
    /// - "01" -> Err(LeadingZero)
    pub fn new(raw: &str) -> Result<Self> {
        check_charset(raw)?;
        if is_all_digits(raw) {
            parse_numeric(raw).map(Identifier::Numeric)
        } else {
            Ok(Identifier::Text(raw.to_string()))
        }
    }

    /// Build a build-metadata identifier. Never numeric.
    pub fn new_build(raw: &str) -> Result<Self> {
        check_charset(raw)?;
        Ok(Identifier::Text(raw.to_string()))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// Text form, or `None` for numeric identifiers
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Identifier::Text(raw) => Some(raw),
            Identifier::Numeric(_) => None,
        }
    }

    /// Numeric value, or `None` for text identifiers
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(value) => Some(*value),
            Identifier::Text(_) => None,
        }
    }

    /// Re-check an identifier placed in a pre-release sequence.
    ///
    /// All-digit text must have been built as `Numeric`, otherwise it would
    /// order as text.
    pub(crate) fn validate_pre(&self) -> Result<()> {
        let Identifier::Text(raw) = self else {
            return Ok(());
        };
        check_charset(raw)?;
        if is_all_digits(raw) {
            parse_numeric(raw)?;
            return Err(Error::MalformedVersion(raw.clone()));
        }
        Ok(())
    }

    /// Re-check an identifier placed in a build-metadata sequence.
    pub(crate) fn validate_build(&self) -> Result<()> {
        match self {
            Identifier::Text(raw) => check_charset(raw),
            Identifier::Numeric(_) => Ok(()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Text(raw) => f.write_str(raw),
            Identifier::Numeric(value) => write!(f, "{}", value),
        }
    }
}

pub(crate) fn is_all_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Convert an all-digit token, rejecting "01"-style leading zeros.
pub(crate) fn parse_numeric(raw: &str) -> Result<u64> {
    if raw.len() > 1 && raw.starts_with('0') {
        return Err(Error::LeadingZero(raw.to_string()));
    }
    raw.parse::<u64>()
        .map_err(|_| Error::NumericOverflow(raw.to_string()))
}

fn check_charset(raw: &str) -> Result<()> {
    if raw.is_empty() {
        return Err(Error::MalformedVersion(raw.to_string()));
    }
    if raw.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        Ok(())
    } else {
        Err(Error::InvalidCharacter(raw.to_string()))
    }
}
