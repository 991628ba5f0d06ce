//! Generation targets: which remote directory to read and where generated
//! components go.
//!
//! Each target is one configuration record consumed by the generic pipeline,
//! replacing what would otherwise be near-identical per-style programs.

use anyhow::{bail, Result};
use std::fmt;
use std::path::PathBuf;

use crate::transform::TransformStrategy;

/// GitHub repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Parses `owner/name`. Exactly one slash, both parts non-empty.
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(RepoId {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => bail!("repository identifier must be of the form owner/name, got {s:?}"),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Rendering mode of the generated component's root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// Filled glyphs: single extracted path, `fill="currentColor"`.
    Solid,
    /// Stroked glyphs: full inlined markup, `stroke="currentColor"`.
    Outline,
}

impl IconStyle {
    /// How raw markup becomes the component body for this style.
    pub fn strategy(self) -> TransformStrategy {
        match self {
            IconStyle::Solid => TransformStrategy::PathOnly,
            IconStyle::Outline => TransformStrategy::InlineMarkup,
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconStyle::Solid => write!(f, "solid"),
            IconStyle::Outline => write!(f, "outline"),
        }
    }
}

/// One generation target: a repository directory to list and the output
/// directory its components land in.
#[derive(Debug, Clone)]
pub struct PipelineTarget {
    /// Name used to select this target from the CLI.
    pub name: String,
    pub repo: RepoId,
    /// Directory path relative to the repository root.
    pub dir: String,
    /// Output directory, joined onto the output root.
    pub output_dir: PathBuf,
    pub style: IconStyle,
}

fn heroicons() -> RepoId {
    RepoId {
        owner: "tailwindlabs".to_string(),
        name: "heroicons".to_string(),
    }
}

/// The built-in targets, in the order `generate` runs them.
pub fn builtin_targets() -> Vec<PipelineTarget> {
    vec![
        PipelineTarget {
            name: "solid".to_string(),
            repo: heroicons(),
            dir: "optimized/24/solid".to_string(),
            output_dir: PathBuf::from("src/icons/solid"),
            style: IconStyle::Solid,
        },
        PipelineTarget {
            name: "outline".to_string(),
            repo: heroicons(),
            dir: "optimized/24/outline".to_string(),
            output_dir: PathBuf::from("src/icons/outline"),
            style: IconStyle::Outline,
        },
    ]
}

/// Looks up a built-in target by name.
pub fn find_target(name: &str) -> Option<PipelineTarget> {
    builtin_targets().into_iter().find(|t| t.name == name)
}
