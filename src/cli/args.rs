//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Default config file name, searched upward from the working directory.
pub const DEFAULT_CONFIG: &str = "tola-index.toml";

/// Single-dash spellings accepted for compatibility with older scripts.
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-index", "--index"),
    ("-appId", "--app-id"),
    ("-appKey", "--app-key"),
];

/// Markdown front matter indexer
#[derive(Parser, Debug, Clone)]
#[command(name = "tola-index", version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to current directory)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: tola-index.toml)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Search index name (also accepted as `-index`)
    #[arg(long, global = true)]
    pub index: Option<String>,

    /// Search application id (also accepted as `-appId`)
    #[arg(long = "app-id", global = true)]
    pub app_id: Option<String>,

    /// Search API key (also accepted as `-appKey`)
    #[arg(long = "app-key", global = true)]
    pub app_key: Option<String>,

    /// subcommands (default: index)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Extract metadata from every document and upload it to the index
    #[command(visible_alias = "i")]
    Index {
        #[command(flatten)]
        args: IndexArgs,
    },

    /// Extract metadata and print the records as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Index command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct IndexArgs {
    /// Skip draft documents (default: false, drafts are uploaded)
    #[arg(short = 'E', long)]
    pub skip_drafts: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Include draft documents in results
    #[arg(short, long)]
    pub drafts: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter `meta` to specific fields (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse process arguments, accepting legacy single-dash flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args()))
    }

    /// Selected command, `index` when none was given.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Index {
            args: IndexArgs::default(),
        })
    }
}

/// Rewrite `-index`, `-appId` and `-appKey` (also in `-flag=value` form) to
/// their long spellings. Everything else passes through unchanged.
pub fn normalize_legacy_flags<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            for (legacy, long) in LEGACY_FLAGS {
                if arg == *legacy {
                    return (*long).to_string();
                }
                if let Some(value) = arg
                    .strip_prefix(legacy)
                    .and_then(|rest| rest.strip_prefix('='))
                {
                    return format!("{long}={value}");
                }
            }
            arg
        })
        .collect()
}
