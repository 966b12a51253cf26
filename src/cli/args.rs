//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Hierarchical epidemic statistics: world, country and province aggregates with daily change
#[derive(Parser, Debug)]
#[command(name = "corona")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (layered over the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where region data is read from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Leaf regions JSON file (default: `data_file` setting)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Time series JSON file matched onto the leaves (default: `series_file` setting)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub series: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the aggregated hierarchy as a tree
    Tree {
        #[command(flatten)]
        source: SourceArgs,
        /// Levels below the world to show
        #[arg(long, default_value_t = 2)]
        depth: usize,
    },

    /// Show details of one region
    Show {
        #[command(flatten)]
        source: SourceArgs,
        /// Region name, e.g. "Italy" or "Hubei, China"
        name: String,
    },

    /// List countries with the most confirmed cases
    Top {
        #[command(flatten)]
        source: SourceArgs,
        /// Number of countries (default: `top_count` setting)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Write the aggregated world tree as JSON ("-" for stdout)
    Export {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings
    Show,
    /// Print global config file path
    Path,
}
