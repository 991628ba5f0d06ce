//! First-path extraction for filled icons.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `d` attribute of a `<path>` element; both quote styles appear upstream.
    static ref RE_PATH_D: Regex =
        Regex::new(r#"<path\b[^>]*?\bd\s*=\s*["']([^"']*)["']"#).unwrap();
}

/// Returns the first path element's `d` value, or `None` when the markup has
/// no path element. Only the first match is used even if more exist.
pub fn first_path_data(markup: &str) -> Option<&str> {
    RE_PATH_D
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
