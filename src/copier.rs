use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Counts of what a [`copy_tree`] call wrote under the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

/// Recursively copies the contents of `src` into `dest`.
///
/// `dest` must already exist. Symlinks are followed. The first failing entry
/// aborts the copy; whatever was written before it stays in place.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<CopyStats> {
    let mut stats = CopyStats::default();
    copy_into(src, dest, &mut stats)?;
    Ok(stats)
}

fn copy_into(src: &Path, dest: &Path, stats: &mut CopyStats) -> Result<()> {
    let entries = fs::read_dir(src).with_context(|| format!("reading {}", src.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("reading {}", src.display()))?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        let meta =
            fs::metadata(&src_path).with_context(|| format!("reading {}", src_path.display()))?;

        if meta.is_dir() {
            fs::create_dir_all(&dest_path)
                .with_context(|| format!("creating {}", dest_path.display()))?;
            stats.dirs += 1;
            copy_into(&src_path, &dest_path, stats)?;
        } else {
            fs::copy(&src_path, &dest_path).with_context(|| {
                format!(
                    "copying {} to {}",
                    src_path.display(),
                    dest_path.display()
                )
            })?;
            debug!(path = %dest_path.display(), "copied file");
            stats.files += 1;
        }
    }
    Ok(())
}
