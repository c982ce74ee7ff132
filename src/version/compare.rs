//! Version precedence
//!
//! Ordering rules:
//! - major, minor, patch compare numerically
//! - a pre-release version is lower than the release with the same core
//! - pre-release identifiers compare left to right; numeric < text,
//!   numeric by value, text by ASCII order, and a shorter prefix is lower
//! - build metadata never takes part
//!
//! `PartialEq`, `Hash` and the `<`/`<=`/`>`/`>=` operators are all defined
//! through [`Ord::cmp`].

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::version::identifier::Identifier;
use crate::version::types::Version;

/// Compare two versions by precedence, ignoring build metadata.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Sort versions in ascending precedence.
///
/// The sort is stable, so versions differing only in build metadata keep
/// their relative order.
pub fn sort(versions: &mut [Version]) {
    versions.sort();
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::Text(_)) => Ordering::Less,
            (Identifier::Text(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Text(a), Identifier::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_pre(&self.pre, &other.pre))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre.hash(state);
    }
}

fn compare_pre(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // a release outranks any of its pre-releases
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}
