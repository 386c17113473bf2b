pub mod install;

use clap::Command;

pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .about("Install the docs-with-mermaid skill for Claude Code")
        .long_about(
            "Install the docs-with-mermaid skill for Claude Code.\n\n\
             Asks whether to install globally (~/.claude/skills/) or into the \
             current project (./.claude/skills/), then copies the bundled skill files.",
        )
        .version(env!("CARGO_PKG_VERSION"))
}
