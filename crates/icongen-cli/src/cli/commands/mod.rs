mod generate;
mod list;
mod targets;

pub use generate::run_generate;
pub use list::run_list;
pub use targets::run_targets;

use anyhow::{bail, Result};
use icongen_core::target::{self, PipelineTarget};

/// Resolves `--target` to the targets a command operates on: one by name, or
/// all built-ins.
pub(crate) fn select_targets(name: Option<&str>) -> Result<Vec<PipelineTarget>> {
    match name {
        None => Ok(target::builtin_targets()),
        Some(n) => match target::find_target(n) {
            Some(t) => Ok(vec![t]),
            None => bail!("unknown target: {n} (see `icongen targets`)"),
        },
    }
}
