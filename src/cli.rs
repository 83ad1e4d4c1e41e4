//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fee",
    version,
    about = "fee — ESLint/Prettier project scaffolding",
    long_about = "fee — an interactive CLI that scaffolds ESLint and Prettier configuration.\n\nAnswers a short question sequence, writes .eslintrc/.prettierrc, installs the referenced packages, and can wire up JetBrains file watchers.\n\nConfiguration precedence: CLI > fee.toml > defaults.",
    after_help = "Examples:\n  fee init\n  fee init --yes --format yaml\n  fee init --skip-install\n  fee watch --root ./my-project",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current fee version.")]
    Version,
    /// Scaffold ESLint/Prettier configuration interactively
    #[command(
        about = "Run the scaffolding wizard",
        long_about = "Ask the scaffolding questions, install the packages the generated config references, and write .eslintrc and (optionally) .prettierrc into the project root.",
        after_help = "Examples:\n  fee init\n  fee init --yes\n  fee init --format yaml --skip-install"
    )]
    Init {
        #[arg(long, help = "Project root (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Config file format: json|yaml (default: json)")]
        format: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Accept the default answer for every question")]
        yes: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Skip npm package installation")]
        skip_install: bool,
    },
    /// Generate JetBrains file watchers for Prettier-on-save
    #[command(
        about = "Generate IDE file watchers",
        long_about = "Write .idea/watcherTasks.xml and merge named scopes into .idea/workspace.xml for the watch rules in fee.toml (all known file types by default). Re-running replaces fee-owned scopes, never duplicates them.",
        after_help = "Examples:\n  fee watch\n  fee watch --root ./my-project"
    )]
    Watch {
        #[arg(long, help = "Project root (default: current dir)")]
        root: Option<String>,
    },
}
