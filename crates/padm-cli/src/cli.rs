use clap::{Args, Parser, Subcommand, ValueEnum};

/// Shared output mode across all commands. Table is the human default;
/// json/raw are for scripting.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

/// Top-level CLI parser for the `padm` binary.
#[derive(Debug, Parser)]
#[command(
    name = "padm",
    version,
    about = "pkgdb-admin - validates package-review workflow requests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, json, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a review bug before creating a new package
    CheckCreate(CheckCreateArgs),
    /// Validate a branch request for an existing package
    CheckBranch(CheckBranchArgs),
    /// Report whether a user holds an approved packager role
    IsPackager {
        /// Username, or email address when it contains `@`
        user: String,
    },
    /// List open review bugs for a component
    Bugs {
        /// Bug tracker component (usually the package name)
        component: String,
    },
    /// Post a comment on a bug
    Comment {
        /// Bug id or ticket URL
        bug: String,
        /// Comment text
        text: String,
    },
    /// Remove feed cache files left over from previous days
    CacheClean,
}

#[derive(Debug, Args)]
pub struct CheckCreateArgs {
    /// Package name under review
    pub pkg_name: String,

    /// One-line package summary (must match the bug title)
    #[arg(long)]
    pub summary: String,

    /// Target collection branch (e.g. f30, el7)
    #[arg(long)]
    pub branch: String,

    /// Requested point of contact (username or email)
    #[arg(long)]
    pub poc: String,

    /// Review bug id or ticket URL
    #[arg(long)]
    pub bug: String,
}

#[derive(Debug, Args)]
pub struct CheckBranchArgs {
    /// Package name
    pub pkg_name: String,

    /// Requested collection branch (e.g. f31, el7)
    #[arg(long)]
    pub branch: String,

    /// User requesting the branch (username or email)
    #[arg(long)]
    pub requester: String,
}
