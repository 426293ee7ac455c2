//! Command-line interface: argument parsing, output, and command handlers.

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ticket-label",
    version,
    about = "File-backed ticket labeling service"
)]
pub struct Cli {
    /// Data directory (overrides configuration)
    #[arg(long, global = true, env = "TICKET_LABEL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Seed the data directory with default data files
    Init {
        /// Recreate data files even if they already exist
        #[arg(long)]
        force: bool,
    },

    /// Import tickets from a CSV file on disk
    Import {
        /// CSV file with an `id,title,content,label` header
        file: PathBuf,
    },
}
