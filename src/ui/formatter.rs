//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text and are unit tested; `display_*`
//! functions print it.

use std::cmp::Ordering;

use console::style;

use crate::cli::{CheckOutcome, SortReport};

/// Error line with a red label
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Symbol for a precedence comparison result
pub fn format_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// One line per checked input, with a check mark or a cross.
pub fn format_check_outcome(outcome: &CheckOutcome) -> String {
    if outcome.valid {
        format!("{} {}", style("✓").green(), outcome.input)
    } else {
        format!("{} {}", style("✗").red(), outcome.input)
    }
}

/// Display the result of `tagver check`.
pub fn display_check_outcomes(outcomes: &[CheckOutcome]) {
    for outcome in outcomes {
        println!("{}", format_check_outcome(outcome));
    }
}

/// Display the result of `tagver sort`.
///
/// Sorted versions go to stdout one per line so the output can be piped;
/// rejected inputs are reported on stderr.
pub fn display_sort_report(report: &SortReport) {
    for version in report.versions.iter() {
        println!("{}", version);
    }

    for input in &report.rejected {
        display_warning(&format!("Skipping invalid version '{}'", input));
    }
}

/// Display the result of `tagver compare`.
pub fn display_comparison(a: &str, b: &str, ordering: Ordering) {
    println!("{} {} {}", a, style(format_ordering(ordering)).bold(), b);
}
