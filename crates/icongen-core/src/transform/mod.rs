//! Markup transformation: raw vector markup to a component body.
//!
//! Both variants are pure string work, no I/O. A transform miss is a skip,
//! not an error: the pipeline logs it and moves on to the next item.

mod extract;
mod inline;

pub use extract::first_path_data;
pub use inline::inline_markup;

use std::fmt;

/// How raw markup becomes a component body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStrategy {
    /// Use only the first `<path>` element's `d` value. Later paths are
    /// silently dropped.
    PathOnly,
    /// Normalize the whole document and inline the root element's children.
    InlineMarkup,
}

/// Why an item produced no component body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Path-only variant found no `<path>` element.
    NoPathData,
    /// Full-markup variant found no root `<svg>` element.
    NoSvgRoot,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoPathData => write!(f, "no path data found in markup"),
            SkipReason::NoSvgRoot => write!(f, "no root svg element found in markup"),
        }
    }
}

/// Transforms raw markup into a component body per `strategy`.
pub fn transform(strategy: TransformStrategy, markup: &str) -> Result<String, SkipReason> {
    match strategy {
        TransformStrategy::PathOnly => first_path_data(markup)
            .map(|d| format!(r#"<path d="{d}" />"#))
            .ok_or(SkipReason::NoPathData),
        TransformStrategy::InlineMarkup => {
            inline_markup(markup).ok_or(SkipReason::NoSvgRoot)
        }
    }
}
