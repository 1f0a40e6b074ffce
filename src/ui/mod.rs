//! User interface module - terminal output for the `tagver` binary.

pub mod formatter;

pub use formatter::{
    display_check_outcomes, display_comparison, display_error, display_sort_report,
    display_warning,
};
