pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};

/// Named site aliases: resolve @name to a deployment root and base URI.
#[derive(Parser, Debug)]
#[command(name = "sitealias", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors and requested data
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to alternative config directory (default: .sitealias)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize sitealias in the current project
    Init,

    /// List all known aliases
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the root and URI of an alias
    Show {
        /// Alias to show (e.g. @mysite)
        alias: String,
        /// Print only this field, for use in scripts
        #[arg(long, value_enum)]
        field: Option<Field>,
    },

    /// Validate every alias file
    Check,

    /// Write aliases back out as a TOML alias file
    Export {
        /// Aliases to export (default: all)
        aliases: Vec<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// A single alias field.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Root,
    Uri,
}
