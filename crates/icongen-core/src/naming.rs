//! Icon naming: derive component identifiers and labels from remote file names.
//!
//! Derivation is a pure function of the file name; no state is carried
//! between items.

/// Suffix appended to every derived component name.
pub const ICON_SUFFIX: &str = "Icon";

/// Recognized vector-file extension, lowercase only.
pub const SVG_EXT: &str = ".svg";

/// Extracts the last path segment from a download URL for use as a file name
/// hint.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn file_name_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// File name minus the `.svg` extension. Other extensions are left alone;
/// the lister only hands us `.svg` entries.
pub fn icon_stem(file_name: &str) -> &str {
    file_name.strip_suffix(SVG_EXT).unwrap_or(file_name)
}

/// Derives the component identifier: hyphen/underscore-separated lowercase
/// words become capitalized and concatenated, then [`ICON_SUFFIX`] is
/// appended.
///
/// The suffix is appended unconditionally, once per call: feeding an already
/// suffixed name back in yields a double suffix.
///
/// # Examples
///
/// - `component_name("arrow-left")` → `"ArrowLeftIcon"`
/// - `component_name("check")` → `"CheckIcon"`
pub fn component_name(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len() + ICON_SUFFIX.len());
    for word in stem.split(['-', '_']).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out.push_str(ICON_SUFFIX);
    out
}
