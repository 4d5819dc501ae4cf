//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Folio content metrics CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate reading time of a markdown file
    #[command(visible_alias = "rt")]
    ReadingTime {
        #[command(flatten)]
        args: ReadingTimeArgs,
    },

    /// Map a human status label to its normalized token
    Status {
        /// Label such as "In Progress"
        label: String,
    },

    /// Format an ISO-8601 timestamp for a comment thread
    Date {
        /// Timestamp such as 2025-01-15T14:30:00.000Z
        iso: String,
    },

    /// Print the like endpoint path for an article
    LikeUrl {
        /// Article topic (e.g. react)
        topic: String,
        /// Article slug (e.g. my-article)
        slug: String,
    },

    /// Print the href a link renders with
    Href {
        /// Treat the page as mounted on the client
        #[arg(short, long)]
        mounted: bool,

        /// Link target
        url: Option<String>,
    },

    /// Classify social profile URLs
    Social {
        /// Profile URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Pretty-print JSON output
        #[arg(short, long, conflicts_with = "text")]
        pretty: bool,

        /// Print one `Platform: handle` line per link instead of JSON
        #[arg(short, long)]
        text: bool,
    },

    /// Summarize articles as JSON
    #[command(visible_alias = "s")]
    Scan {
        #[command(flatten)]
        args: ScanArgs,
    },
}

impl Commands {
    /// Whether the command reads `folio.toml`.
    pub fn needs_config(&self) -> bool {
        matches!(self, Self::ReadingTime { .. } | Self::Scan { .. })
    }
}

/// Reading-time command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ReadingTimeArgs {
    /// Markdown file; omit or use `-` to read stdin
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub path: Option<PathBuf>,

    /// Words per minute (overrides `reading.words_per_minute`)
    #[arg(short, long)]
    pub wpm: Option<u32>,

    /// Print `{"words": .., "minutes": ..}` instead of minutes
    #[arg(short, long)]
    pub json: bool,
}

/// Scan command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Files or directories to scan (default: the content directory).
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Include draft articles
    #[arg(short, long)]
    pub drafts: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
