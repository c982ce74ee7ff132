//! Semantic version values and the functions that operate on them
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Identifier │────▶│   Version   │◀────│   Parser    │
//! │ (pre/build) │     │  (fields)   │     │  (string)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                        │         │
//!                        ▼         ▼
//!                 ┌─────────────┐ ┌─────────────┐
//!                 │   Compare   │ │   Format    │
//!                 │ (precedence)│ │ (canonical) │
//!                 └─────────────┘ └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`identifier`]: Pre-release and build-metadata identifiers
//! - [`types`]: The `Version` struct and its validation
//! - [`parser`]: String to `Version` conversion
//! - [`compare`]: Precedence ordering and sorting
//! - [`format`]: Canonical string rendering
//! - [`error`]: Error kinds shared by parsing and validation

pub mod compare;
pub mod error;
pub mod format;
pub mod identifier;
pub mod parser;
mod serialize;
pub mod types;
