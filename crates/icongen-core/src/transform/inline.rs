//! Full-markup normalization and inlining for stroked icons.
//!
//! Pipeline: strip prolog/doctype/comments, flatten `style` declarations
//! into presentation attributes, normalize color and transform notation,
//! then lift the inner content of the root `<svg>` element. `viewBox` values
//! and `id` attributes pass through untouched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref RE_PROLOG: Regex = Regex::new(r"(?s)<\?.*?\?>").unwrap();
    static ref RE_DOCTYPE: Regex = Regex::new(r"(?s)<!DOCTYPE[^>]*>").unwrap();
    static ref RE_COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref RE_STYLE_ATTR: Regex = Regex::new(r#"\bstyle\s*=\s*"([^"]*)""#).unwrap();
    static ref RE_RGB: Regex =
        Regex::new(r"rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)").unwrap();
    // Hex case is only normalized inside color-carrying attributes so that
    // id values and url(#...) references are never rewritten.
    static ref RE_COLOR_ATTR: Regex =
        Regex::new(r#"\b(fill|stroke|stop-color|color)="(#[0-9A-Fa-f]{3,8})""#).unwrap();
    static ref RE_TRANSFORM_ATTR: Regex = Regex::new(r#"\btransform\s*=\s*"([^"]*)""#).unwrap();
}

/// Normalizes `markup` and returns the inner content of its root `<svg>`
/// element, trimmed, ready for embedding. `None` when there is no root
/// `<svg>` element.
pub fn inline_markup(markup: &str) -> Option<String> {
    let cleaned = strip_noise(markup);
    let flattened = flatten_style_attrs(&cleaned);
    let colored = normalize_colors(&flattened);
    let normalized = normalize_transforms(&colored);
    inner_svg_content(&normalized).map(|s| s.trim().to_string())
}

/// Drops the XML prolog, DOCTYPE, and comments.
fn strip_noise(markup: &str) -> String {
    let no_prolog = RE_PROLOG.replace_all(markup, "");
    let no_doctype = RE_DOCTYPE.replace_all(&no_prolog, "");
    RE_COMMENT.replace_all(&no_doctype, "").into_owned()
}

/// `style="fill:#f00; stroke-width: 2"` → `fill="#f00" stroke-width="2"`.
fn flatten_style_attrs(markup: &str) -> String {
    RE_STYLE_ATTR
        .replace_all(markup, |caps: &Captures| {
            let attrs: Vec<String> = caps[1]
                .split(';')
                .filter_map(|decl| {
                    let (key, value) = decl.split_once(':')?;
                    let (key, value) = (key.trim(), value.trim());
                    if key.is_empty() || value.is_empty() {
                        return None;
                    }
                    Some(format!(r#"{key}="{value}""#))
                })
                .collect();
            attrs.join(" ")
        })
        .into_owned()
}

/// `rgb(255, 0, 0)` → `#ff0000`; uppercase hex in color attributes →
/// lowercase.
fn normalize_colors(markup: &str) -> String {
    let rgb_done = RE_RGB.replace_all(markup, |caps: &Captures| {
        let channel = |i: usize| caps[i].parse::<u32>().unwrap_or(0).min(255);
        format!("#{:02x}{:02x}{:02x}", channel(1), channel(2), channel(3))
    });
    RE_COLOR_ATTR
        .replace_all(&rgb_done, |caps: &Captures| {
            format!(r#"{}="{}""#, &caps[1], caps[2].to_ascii_lowercase())
        })
        .into_owned()
}

/// Collapses whitespace and comma noise inside `transform` lists.
fn normalize_transforms(markup: &str) -> String {
    RE_TRANSFORM_ATTR
        .replace_all(markup, |caps: &Captures| {
            format!(r#"transform="{}""#, normalize_transform_list(&caps[1]))
        })
        .into_owned()
}

/// `translate( 1 ,  2 )  rotate(45)` → `translate(1 2) rotate(45)`.
fn normalize_transform_list(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending = false;
    for ch in value.chars() {
        if ch.is_whitespace() || ch == ',' {
            pending = true;
            continue;
        }
        if pending {
            if ch != '(' && ch != ')' && !out.is_empty() && !out.ends_with('(') {
                out.push(' ');
            }
            pending = false;
        }
        out.push(ch);
    }
    out
}

/// Inner content of the root `<svg>` element, or `None` when there is none.
fn inner_svg_content(markup: &str) -> Option<&str> {
    let open = markup.find("<svg")?;
    let rest = &markup[open..];
    let tag_end = find_tag_end(rest)?;
    if rest[..tag_end].trim_end().ends_with('/') {
        // self-closing root: no children
        return Some("");
    }
    let inner_start = open + tag_end + 1;
    let close = markup.rfind("</svg")?;
    if close < inner_start {
        return None;
    }
    Some(&markup[inner_start..close])
}

/// Index of the open tag's terminating `>`, skipping quoted attribute values.
fn find_tag_end(tag: &str) -> Option<usize> {
    let mut in_quote: Option<char> = None;
    for (i, ch) in tag.char_indices() {
        match in_quote {
            Some(q) if ch == q => in_quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => in_quote = Some(ch),
                '>' => return Some(i),
                _ => {}
            },
        }
    }
    None
}
