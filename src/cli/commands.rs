use std::cmp::Ordering;

use tracing::trace;

use crate::domain::{Version, Versions};
use crate::error::Result;
use crate::validator;

/// How version arguments are read by `sort` and `compare`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Full MAJOR.MINOR.PATCH required
    #[default]
    Strict,
    /// Missing minor/patch numbers are filled with zero
    Lax,
}

impl ParseMode {
    pub fn from_lax(lax: bool) -> Self {
        if lax {
            ParseMode::Lax
        } else {
            ParseMode::Strict
        }
    }

    pub fn parse(self, input: &str, prefixes: &[String]) -> Result<Version> {
        match self {
            ParseMode::Strict => Version::parse_with_prefixes(input, prefixes),
            ParseMode::Lax => Version::parse_lax(input, prefixes),
        }
    }
}

/// Result of validating one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub input: String,
    pub valid: bool,
}

/// Result of sorting a list of inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Parsed versions in the requested order
    pub versions: Versions,
    /// Inputs that could not be parsed, in input order
    pub rejected: Vec<String>,
}

/// Validate every input against the grammar.
pub fn check(inputs: &[String], prefixes: &[String]) -> Vec<CheckOutcome> {
    inputs
        .iter()
        .map(|input| {
            let valid = validator::is_valid_with_prefixes(input, prefixes);
            trace!(input = %input, valid, "checked");
            CheckOutcome {
                input: input.clone(),
                valid,
            }
        })
        .collect()
}

/// Parse every input and sort the parsed versions by precedence.
///
/// Inputs that fail to parse are collected in `rejected` instead of aborting.
pub fn sort(inputs: &[String], prefixes: &[String], mode: ParseMode, reverse: bool) -> SortReport {
    let mut report = SortReport::default();

    for input in inputs {
        match mode.parse(input, prefixes) {
            Ok(version) => report.versions.push(version),
            Err(e) => {
                trace!(input = %input, error = %e, "skipping unparsable version");
                report.rejected.push(input.clone());
            }
        }
    }

    if reverse {
        report.versions.sort_reverse();
    } else {
        report.versions.sort();
    }
    report
}

/// Compare two inputs by precedence. Build metadata is ignored.
pub fn compare(a: &str, b: &str, prefixes: &[String], mode: ParseMode) -> Result<Ordering> {
    let left = mode.parse(a, prefixes)?;
    let right = mode.parse(b, prefixes)?;
    Ok(left.cmp_precedence(&right))
}
