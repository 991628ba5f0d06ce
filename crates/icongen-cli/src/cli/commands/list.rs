//! `icongen list` – show what the lister currently sees.

use anyhow::Result;

use icongen_core::config::IcongenConfig;
use icongen_core::source::{GitHubSource, IconSource};

use super::select_targets;

pub fn run_list(cfg: &IcongenConfig, target_name: Option<&str>) -> Result<()> {
    for t in select_targets(target_name)? {
        let source = GitHubSource::new(t.repo.clone(), &t.dir, cfg);
        let entries = source.list();
        if entries.is_empty() {
            println!("{}: no entries", t.name);
            continue;
        }
        println!("{} ({} entries):", t.name, entries.len());
        for e in entries {
            println!("  {:<32} {}", e.name, e.download_url);
        }
    }
    Ok(())
}
