//! Command logic behind the `tagver` binary
//!
//! Each command is a pure function over its inputs and returns a report.
//! Printing lives in [`crate::ui`], argument parsing in `main.rs`.

pub mod commands;

pub use commands::{check, compare, sort, CheckOutcome, ParseMode, SortReport};
