use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{InstallMode, Paths};
use crate::copier::{self, CopyStats};
use crate::output::{self, InstallReport, Outcome};
use crate::prompt::Prompter;

pub const LOCATION_PROMPT: &str = "Where would you like to install?";
pub const OVERWRITE_PROMPT: &str = "Skill already exists. Overwrite?";

/// Runs the interactive install. Nothing on disk changes until every prompt has been answered.
pub fn run(prompter: &mut dyn Prompter, paths: &Paths) -> Result<Outcome> {
    let Some(mode) = prompter.select_location(LOCATION_PROMPT, &InstallMode::ALL)? else {
        return Ok(Outcome::Cancelled);
    };

    let target = paths.target_dir(mode)?;
    debug!(%mode, target = %target.display(), "resolved install target");

    if !confirm_overwrite_if_needed(prompter, &target)? {
        return Ok(Outcome::Cancelled);
    }

    let spinner = output::spinner("Installing skill...");
    match install(&paths.source_dir, &target) {
        Ok(stats) => {
            spinner.finish_with_message("Skill installed!");
            Ok(Outcome::Installed(InstallReport {
                mode,
                target,
                stats,
            }))
        }
        Err(err) => {
            spinner.abandon_with_message("Installation failed.");
            Err(err)
        }
    }
}

/// Asks before replacing an existing install. Declining and cancelling both return false.
pub fn confirm_overwrite_if_needed(prompter: &mut dyn Prompter, target: &Path) -> Result<bool> {
    if !exists(target) {
        return Ok(true);
    }
    Ok(prompter.confirm(OVERWRITE_PROMPT)? == Some(true))
}

/// Anything at `target` counts, including a file or a dangling symlink.
fn exists(target: &Path) -> bool {
    fs::symlink_metadata(target).is_ok()
}

/// Replaces `target` with a fresh copy of `source`.
pub fn install(source: &Path, target: &Path) -> Result<CopyStats> {
    if let Ok(meta) = fs::symlink_metadata(target) {
        let removed = if meta.is_dir() {
            fs::remove_dir_all(target)
        } else {
            fs::remove_file(target)
        };
        removed.with_context(|| format!("removing existing {}", target.display()))?;
    }
    fs::create_dir_all(target).with_context(|| format!("creating {}", target.display()))?;

    let stats = copier::copy_tree(source, target)?;
    info!(
        files = stats.files,
        dirs = stats.dirs,
        target = %target.display(),
        "skill installed"
    );
    Ok(stats)
}
