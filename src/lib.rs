//! Validation and ordering of semantic version strings.
//!
//! [`is_valid`] and [`is_valid_with_prefixes`] check a string against the
//! SemVer grammar in a single pass. [`Prerelease`] models the pre-release
//! identifiers and orders them by SemVer precedence; [`Version`] and
//! [`Versions`] build on both.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod validator;

pub use domain::{Identifier, Prerelease, Version, Versions};
pub use error::{Result, TagverError};
pub use validator::{is_valid, is_valid_with_prefixes};
