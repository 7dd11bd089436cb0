//! Static asset mirroring.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Mirror the static asset tree into the destination.
///
/// Any pre-existing destination tree is deleted first, so the output always
/// reflects exactly the current source. A missing source directory is not an
/// error; the copy is skipped with a warning.
pub fn copy_directory(src: &Path, dest: &Path) -> Result<()> {
    if !src.exists() {
        warn!(src = %src.display(), "no static directory found, skipping asset copy");
        return Ok(());
    }

    if dest.exists() {
        fs::remove_dir_all(dest)
            .with_context(|| format!("deleting existing output directory {}", dest.display()))?;
        info!(dest = %dest.display(), "deleted existing output directory");
    }

    copy_recursive(src, dest)?;
    info!(src = %src.display(), dest = %dest.display(), "copied static assets");
    Ok(())
}

fn copy_recursive(src: &Path, dest: &Path) -> Result<()> {
    if src.is_dir() {
        fs::create_dir_all(dest)
            .with_context(|| format!("creating directory {}", dest.display()))?;
        for entry in fs::read_dir(src).with_context(|| format!("reading {}", src.display()))? {
            let entry = entry?;
            copy_recursive(&entry.path(), &dest.join(entry.file_name()))?;
        }
    } else {
        fs::copy(src, dest)
            .with_context(|| format!("copying {} to {}", src.display(), dest.display()))?;
    }
    Ok(())
}
