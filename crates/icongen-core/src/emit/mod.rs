//! Output path construction and file writing.

mod format;
mod template;

pub use format::reindent_markup;
pub use template::{component_source, COMPONENT_EXT};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Output path for one icon: `{dir}/{IconName}.{ext}`.
pub fn component_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{COMPONENT_EXT}"))
}

/// Creates `dir` and any missing parents. Idempotent; returns whether
/// anything had to be created (callers currently ignore the flag).
pub fn ensure_dir(dir: &Path) -> io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}

/// Writes the component text, overwriting any existing file of the same
/// name. No diff check.
pub fn write_component(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, text)
}
