//! Mapping of free-form spreadsheet names onto SQL identifiers.

use std::sync::OnceLock;

use regex::Regex;

static NUMERIC_PREFIX: OnceLock<Regex> = OnceLock::new();
static NON_ALPHANUMERIC: OnceLock<Regex> = OnceLock::new();

fn numeric_prefix() -> &'static Regex {
    NUMERIC_PREFIX.get_or_init(|| Regex::new(r"^\d+\s*").expect("valid numeric prefix pattern"))
}

fn non_alphanumeric() -> &'static Regex {
    NON_ALPHANUMERIC
        .get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid separator pattern"))
}

/// Strips one leading numeric prefix, collapses every run of characters
/// outside `[A-Za-z0-9]` into `_`, then trims `_` from both ends.
///
/// A name with no alphanumeric characters becomes the empty string.
pub fn sanitize(raw: &str) -> String {
    let without_prefix = numeric_prefix().replace(raw, "");
    let collapsed = non_alphanumeric().replace_all(&without_prefix, "_");
    collapsed.trim_matches('_').to_string()
}

/// Name given to a blank header cell at zero-based `index`.
pub fn unnamed_column(index: usize) -> String {
    format!("Unnamed: {index}")
}
