//! `icongen generate` – run the generation pipeline.

use anyhow::Result;
use std::path::PathBuf;

use icongen_core::config::IcongenConfig;
use icongen_core::pipeline;
use icongen_core::source::GitHubSource;
use icongen_core::target::RepoId;

use super::select_targets;

pub fn run_generate(
    cfg: &IcongenConfig,
    target_name: Option<&str>,
    out_root: Option<PathBuf>,
    repo_override: Option<&str>,
) -> Result<()> {
    let mut targets = select_targets(target_name)?;
    if let Some(repo) = repo_override {
        let repo = RepoId::parse(repo)?;
        for t in &mut targets {
            t.repo = repo.clone();
        }
    }

    let out_root = match out_root.or_else(|| cfg.output_root.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    for t in &targets {
        let source = GitHubSource::new(t.repo.clone(), &t.dir, cfg);
        let report = pipeline::run_target(&source, t, &out_root);
        println!(
            "{}: {} written, {} skipped, {} failed",
            t.name,
            report.written(),
            report.skipped(),
            report.failed()
        );
    }
    Ok(())
}
