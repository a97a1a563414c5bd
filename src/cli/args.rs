//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Reconstructs an organisation's management hierarchy and reports salary band and reporting line violations
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging, repeat for more (-d -d -d)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (overrides the global config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print salary and reporting line reports for a CSV file
    Analyze {
        /// Employee CSV file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        overrides: AnalysisOverrides,
    },

    /// Print the reconstructed management hierarchy
    Tree {
        /// Employee CSV file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
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

/// Per-run overrides of the loaded settings
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct AnalysisOverrides {
    /// Lower salary band, percent of the subordinates' average
    #[arg(long)]
    pub lower_pct: Option<u32>,

    /// Upper salary band, percent of the subordinates' average
    #[arg(long)]
    pub upper_pct: Option<u32>,

    /// Maximum number of managers above an employee
    #[arg(long)]
    pub max_depth: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show global config file location
    Path,
}
