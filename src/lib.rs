//! Strict Semantic Versioning 2.0.0 values.
//!
//! ```
//! use semver_core::{Version, compare, parse};
//! use std::cmp::Ordering;
//!
//! let beta = parse("1.0.0-beta.2").unwrap();
//! let later = parse("1.0.0-beta.11").unwrap();
//! assert_eq!(compare(&beta, &later), Ordering::Less);
//! assert_eq!(later.to_string(), "1.0.0-beta.11");
//! assert!(Version::new(1, 0, 0) > later);
//! ```

pub mod version;

pub use version::compare::{compare, sort};
pub use version::error::{Error, Result};
pub use version::format::format;
pub use version::identifier::Identifier;
pub use version::parser::parse;
pub use version::types::Version;
