//! Contents-API response parsing and extension filtering.

use serde::Deserialize;

use super::IconEntry;
use crate::naming::SVG_EXT;

/// One entry of a `GET /repos/{owner}/{repo}/contents/{path}` response.
/// `download_url` is null for subdirectories.
#[derive(Debug, Deserialize)]
pub struct ContentsEntry {
    pub name: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Parses a listing body and keeps the vector-file entries.
pub fn parse_listing(body: &str) -> Result<Vec<IconEntry>, serde_json::Error> {
    let entries: Vec<ContentsEntry> = serde_json::from_str(body)?;
    Ok(filter_svg_entries(entries))
}

/// Keeps file entries whose name ends in the lowercase `.svg` extension,
/// in listing order. Matching is case-sensitive: `c.SVG` is excluded.
pub fn filter_svg_entries(entries: Vec<ContentsEntry>) -> Vec<IconEntry> {
    entries
        .into_iter()
        .filter_map(|e| {
            if e.kind.as_deref().is_some_and(|k| k != "file") {
                return None;
            }
            if !e.name.ends_with(SVG_EXT) {
                return None;
            }
            let download_url = e.download_url?;
            Some(IconEntry {
                name: e.name,
                download_url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, url: Option<&str>, kind: &str) -> ContentsEntry {
        ContentsEntry {
            name: name.to_string(),
            download_url: url.map(str::to_string),
            kind: Some(kind.to_string()),
        }
    }

    #[test]
    fn filter_keeps_only_lowercase_svg() {
        let entries = vec![
            entry("a.svg", Some("https://x/a.svg"), "file"),
            entry("b.png", Some("https://x/b.png"), "file"),
            entry("c.SVG", Some("https://x/c.SVG"), "file"),
        ];
        let kept = filter_svg_entries(entries);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "a.svg");
        assert_eq!(kept[0].download_url, "https://x/a.svg");
    }

    #[test]
    fn filter_skips_directories_and_null_urls() {
        let entries = vec![
            entry("nested.svg", None, "dir"),
            ContentsEntry {
                name: "broken.svg".to_string(),
                download_url: None,
                kind: Some("file".to_string()),
            },
            entry("ok.svg", Some("https://x/ok.svg"), "file"),
        ];
        let kept = filter_svg_entries(entries);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "ok.svg");
    }

    #[test]
    fn filter_preserves_listing_order() {
        let entries = vec![
            entry("b.svg", Some("u1"), "file"),
            entry("a.svg", Some("u2"), "file"),
        ];
        let kept = filter_svg_entries(entries);
        assert_eq!(kept[0].name, "b.svg");
        assert_eq!(kept[1].name, "a.svg");
    }

    #[test]
    fn parse_listing_github_shape() {
        let body = r#"[
            {
                "name": "check.svg",
                "path": "optimized/24/solid/check.svg",
                "sha": "abc",
                "type": "file",
                "download_url": "https://raw.example.com/check.svg"
            },
            {
                "name": "20",
                "type": "dir",
                "download_url": null
            }
        ]"#;
        let entries = parse_listing(body).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "check.svg");
        assert_eq!(entries[0].download_url, "https://raw.example.com/check.svg");
    }

    #[test]
    fn parse_listing_rejects_non_array() {
        assert!(parse_listing(r#"{"message":"Not Found"}"#).is_err());
        assert!(parse_listing("not json").is_err());
    }
}
