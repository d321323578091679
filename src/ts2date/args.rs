use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ts2date", version)]
#[command(about = "Rewrite /Date(millis)/ record attributes as calendar dates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding ts2date.json
    #[arg(long, global = true, env = "TS2DATE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert legacy date attributes on JSON Lines records
    #[command(alias = "run")]
    Convert {
        /// Comma separated attribute names (overrides the config file)
        #[arg(short, long)]
        attributes: Option<String>,

        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the configuration is valid
    Validate {
        /// Comma separated attribute names (overrides the config file)
        #[arg(short, long)]
        attributes: Option<String>,
    },

    /// Describe the processor, its property and relationship
    Describe,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., attributes-list)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
