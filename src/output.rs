use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{InstallMode, SKILL_NAME};
use crate::copier::CopyStats;

pub const CANCELLED_MESSAGE: &str = "Installation cancelled.";

#[derive(Debug)]
pub struct InstallReport {
    pub mode: InstallMode,
    pub target: PathBuf,
    pub stats: CopyStats,
}

/// Result of a run that did not fail. Both variants exit 0.
#[derive(Debug)]
pub enum Outcome {
    Installed(InstallReport),
    Cancelled,
}

pub fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Installed(report) => println!("{}", format_installed(report)),
        Outcome::Cancelled => eprintln!("{}", CANCELLED_MESSAGE),
    }
}

pub fn intro() {
    eprintln!();
    eprintln!("{}", env!("CARGO_PKG_NAME"));
}

pub fn format_installed(report: &InstallReport) -> String {
    format!(
        "Installed {} ({}, {} file(s)) to {}\n\n\
         Next steps:\n  \
         Use /{} in Claude Code\n  \
         or ask Claude to document something\n\n\
         Happy documenting!",
        SKILL_NAME,
        report.mode,
        report.stats.files,
        report.target.display(),
        SKILL_NAME,
    )
}

pub fn format_error(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

/// Starts a spinner on stderr. Drawing is suppressed when stderr is not a terminal.
pub fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
