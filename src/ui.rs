//! Output formatting - pure formatters plus thin display wrappers.
//!
//! The `format_*` functions build the exact strings and are testable; the
//! `display_*` functions only write them to the right stream.

use crate::ranking::{ParseFailure, ParsedTag};

/// Format one tag for display: prefix, space, name, newline, message,
/// blank line. The space is printed even with an empty prefix.
pub fn format_tag(prefix: &str, tag: &ParsedTag) -> String {
    format!("{} {}\n{}\n\n", prefix, tag.name, tag.message)
}

/// Format the aggregated parse-failure report.
///
/// Returns an empty string when there is nothing to report, otherwise a
/// block headed by "Errors parsing semver tags:" with one entry per
/// failure.
pub fn format_parse_failures(failures: &[ParseFailure]) -> String {
    if failures.is_empty() {
        return String::new();
    }

    let mut report = String::from("\n\nErrors parsing semver tags:\n");
    for failure in failures {
        report.push_str(&format!(
            "error parsing tag {}: {}\n\n",
            failure.name, failure.error
        ));
    }
    report
}

/// Print one tag to stdout.
pub fn display_tag(prefix: &str, tag: &ParsedTag) {
    print!("{}", format_tag(prefix, tag));
}

/// Print the aggregated parse-failure report to stderr, after all normal
/// output. Prints nothing when the list is empty.
pub fn display_parse_failures(failures: &[ParseFailure]) {
    eprint!("{}", format_parse_failures(failures));
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}
