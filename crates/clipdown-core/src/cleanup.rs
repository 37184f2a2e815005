//! Final whitespace normalization
//!
//! Runs once over the accumulated Markdown after the whole tree has been
//! walked.

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_BLANKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+\n").expect("TRAILING_BLANKS should compile"));

static EXCESS_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES should compile"));

/// Normalize accumulated Markdown.
///
/// Strips spaces and tabs before every newline, collapses runs of three or
/// more newlines to a single blank line, and trims the whole result.
/// Trailing blanks go first so that a whitespace-only line can never leave
/// a run of three newlines behind; `cleanup(cleanup(x)) == cleanup(x)`.
pub fn cleanup(markdown: &str) -> String {
    let stripped = TRAILING_BLANKS.replace_all(markdown, "\n");
    let collapsed = EXCESS_NEWLINES.replace_all(&stripped, "\n\n");
    collapsed.trim().to_string()
}
