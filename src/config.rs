use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const SKILL_NAME: &str = "docs-with-mermaid";

/// Environment variable that points the installer at a different skill bundle.
pub const SOURCE_ENV: &str = "DOCS_WITH_MERMAID_SOURCE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    Global,
    Local,
}

impl InstallMode {
    pub const ALL: [InstallMode; 2] = [InstallMode::Global, InstallMode::Local];

    pub fn as_str(self) -> &'static str {
        match self {
            InstallMode::Global => "global",
            InstallMode::Local => "local",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InstallMode::Global => "Global (~/.claude/skills/)",
            InstallMode::Local => "Local (./.claude/skills/)",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            InstallMode::Global => "Available in all projects",
            InstallMode::Local => "This project only",
        }
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Paths {
    pub home: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
    pub source_dir: PathBuf,
}

impl Paths {
    /// Resolve paths from environment (HOME, cwd, executable location). Called once at startup.
    /// A missing home or cwd only matters once a mode that needs it is chosen.
    pub fn resolve() -> Paths {
        Paths {
            home: dirs::home_dir(),
            cwd: std::env::current_dir().ok(),
            source_dir: source_dir(),
        }
    }

    /// Construct paths from explicit directories. Used in tests.
    #[cfg(test)]
    pub fn from_dirs(home: Option<&Path>, cwd: Option<&Path>, source_dir: &Path) -> Paths {
        Paths {
            home: home.map(Path::to_path_buf),
            cwd: cwd.map(Path::to_path_buf),
            source_dir: source_dir.to_path_buf(),
        }
    }

    pub fn target_dir(&self, mode: InstallMode) -> Result<PathBuf> {
        target_dir_with(mode, self.home.as_deref(), self.cwd.as_deref())
    }
}

fn skills_dir(root: &Path) -> PathBuf {
    root.join(".claude").join("skills")
}

/// Resolves the install directory for a mode. Accepts injectable home and cwd for testing.
pub fn target_dir_with(
    mode: InstallMode,
    home: Option<&Path>,
    cwd: Option<&Path>,
) -> Result<PathBuf> {
    let root = match mode {
        InstallMode::Global => home.context("cannot determine home directory")?,
        InstallMode::Local => cwd.context("cannot determine current directory")?,
    };
    Ok(skills_dir(root).join(SKILL_NAME))
}

/// Resolves the bundled skill directory.
///
/// An explicit override wins. Otherwise the bundle is looked up next to the
/// executable (archive layout), then under `../share` (package layout), and
/// finally in the source tree the binary was built from.
pub fn source_dir_with(
    override_dir: Option<&str>,
    exe_dir: Option<&Path>,
    manifest_dir: &Path,
) -> PathBuf {
    if let Some(dir) = override_dir.filter(|s| !s.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(exe_dir) = exe_dir {
        let candidates = [
            exe_dir.join("skills").join(SKILL_NAME),
            exe_dir
                .join("..")
                .join("share")
                .join(env!("CARGO_PKG_NAME"))
                .join("skills")
                .join(SKILL_NAME),
        ];
        if let Some(found) = candidates.into_iter().find(|c| c.is_dir()) {
            return found;
        }
    }
    manifest_dir.join("skills").join(SKILL_NAME)
}

fn source_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    source_dir_with(
        std::env::var(SOURCE_ENV).ok().as_deref(),
        exe_dir.as_deref(),
        Path::new(env!("CARGO_MANIFEST_DIR")),
    )
}
