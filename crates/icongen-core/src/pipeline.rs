//! Sequential generation pipeline.
//!
//! List once, then fetch → transform → emit per entry, in listing order.
//! Item N's fetch starts only after item N-1 finished or failed. Every
//! failure is logged, recorded in the report, and isolated to its item; the
//! loop always runs to the end of the list.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::emit;
use crate::naming;
use crate::source::{FetchError, IconEntry, IconSource};
use crate::target::PipelineTarget;
use crate::transform::{self, SkipReason, TransformStrategy};

/// Error that fails one item (the item is recorded and the loop continues).
#[derive(Debug, Error)]
pub enum ItemError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happened to one icon.
#[derive(Debug)]
pub enum ItemStatus {
    /// Component file written.
    Written { path: PathBuf },
    /// No file produced; transform found nothing to use.
    Skipped { reason: SkipReason },
    /// Fetch or filesystem failure.
    Failed { error: ItemError },
}

/// Outcome of one icon in a run, in listing order.
#[derive(Debug)]
pub struct ItemOutcome {
    /// Derived component name (e.g. `CheckIcon`).
    pub icon: String,
    pub url: String,
    pub status: ItemStatus,
}

/// Per-item outcomes of one target run. Callers and tests assert on this
/// instead of console output.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl RunReport {
    pub fn written(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Written { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&ItemStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Runs one target to completion against `source`, writing components under
/// `out_root` joined with the target's output directory.
pub fn run_target(
    source: &dyn IconSource,
    target: &PipelineTarget,
    out_root: &Path,
) -> RunReport {
    let entries = source.list();
    if entries.is_empty() {
        tracing::warn!("{}: no icon entries listed, nothing to generate", target.name);
    }

    let out_dir = out_root.join(&target.output_dir);
    let mut report = RunReport::default();
    for entry in entries {
        // The descriptor is the download URL; its last path segment names the
        // icon. The listing entry's name is the fallback for odd URLs.
        let file_name = naming::file_name_from_url(&entry.download_url)
            .unwrap_or_else(|| entry.name.clone());
        let stem = naming::icon_stem(&file_name).to_string();
        let name = naming::component_name(&stem);
        let status = process_item(source, target, &out_dir, &entry, &stem, &name);
        match &status {
            ItemStatus::Written { path } => {
                tracing::info!("{} -> {}", entry.name, path.display());
            }
            ItemStatus::Skipped { reason } => {
                tracing::warn!("{} skipped: {}", entry.name, reason);
            }
            ItemStatus::Failed { error } => {
                tracing::warn!("{} failed: {}", entry.name, error);
            }
        }
        report.outcomes.push(ItemOutcome {
            icon: name,
            url: entry.download_url,
            status,
        });
    }
    report
}

fn process_item(
    source: &dyn IconSource,
    target: &PipelineTarget,
    out_dir: &Path,
    entry: &IconEntry,
    stem: &str,
    name: &str,
) -> ItemStatus {
    let markup = match source.fetch(&entry.download_url) {
        Ok(m) => m,
        Err(e) => {
            return ItemStatus::Failed { error: e.into() };
        }
    };

    let strategy = target.style.strategy();
    let body = match transform::transform(strategy, &markup) {
        Ok(b) => b,
        Err(reason) => return ItemStatus::Skipped { reason },
    };

    // Full-markup output is reformatted; path-only output is written verbatim
    // after trimming.
    let body = match strategy {
        TransformStrategy::InlineMarkup => emit::reindent_markup(&body, 6),
        TransformStrategy::PathOnly => format!("      {}", body.trim()),
    };
    let text = emit::component_source(name, stem, target.style, &body);

    match emit::ensure_dir(out_dir) {
        Ok(_created) => {}
        Err(e) => {
            return ItemStatus::Failed {
                error: ItemError::Write {
                    path: out_dir.to_path_buf(),
                    source: e,
                },
            };
        }
    }

    let path = emit::component_path(out_dir, name);
    match emit::write_component(&path, &text) {
        Ok(()) => ItemStatus::Written { path },
        Err(e) => ItemStatus::Failed {
            error: ItemError::Write { path, source: e },
        },
    }
}
