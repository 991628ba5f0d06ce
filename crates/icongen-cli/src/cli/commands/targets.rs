//! `icongen targets` – show the built-in generation targets.

use anyhow::Result;

use icongen_core::target::builtin_targets;

pub fn run_targets() -> Result<()> {
    println!(
        "{:<10} {:<28} {:<24} {:<20} {}",
        "NAME", "REPO", "DIR", "OUTPUT", "STYLE"
    );
    for t in builtin_targets() {
        println!(
            "{:<10} {:<28} {:<24} {:<20} {}",
            t.name,
            t.repo.to_string(),
            t.dir,
            t.output_dir.display(),
            t.style
        );
    }
    Ok(())
}
