mod cli;
mod config;
mod copier;
mod output;
mod prompt;
#[cfg(test)]
mod testutil;

use std::process;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = cli::build_cli().get_matches();
    init_logging();

    std::panic::set_hook(Box::new(|info| {
        error!("Unexpected error: {}", info);
        process::exit(1);
    }));

    output::intro();

    let paths = config::Paths::resolve();

    let mut prompter = prompt::TerminalPrompter;
    match cli::install::run(&mut prompter, &paths) {
        Ok(outcome) => output::render(&outcome),
        Err(err) => {
            render_error(err);
            process::exit(1);
        }
    }
}

/// Logs go to stderr, filtered by RUST_LOG. Quiet unless something goes wrong.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn render_error(err: anyhow::Error) {
    debug!(error = ?err, "installation failed");
    eprintln!("{}", output::format_error(&err));
}
