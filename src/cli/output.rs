//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

pub const SALARY_REPORT_HEADING: &str = " # SALARY REPORT #";
pub const REPORTING_LINE_REPORT_HEADING: &str = " # REPORTING_LINE REPORT #";

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print plain output (no color, for report lines)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print a report section: fixed heading, then one line per finding.
pub fn report_section<T: std::fmt::Display>(heading: &str, lines: &[T]) {
    info(heading);
    for line in lines {
        info(line);
    }
}
