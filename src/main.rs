//! ticket-label - file-backed ticket labeling service
//!
//! This is the main entry point for the ticket-label CLI application.
//! It parses command-line arguments and dispatches to the command handlers.

use clap::Parser;
use std::process;
use ticket_label::cli::{Cli, Commands, OutputFormatter, handlers};
use ticket_label::error::Result;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.no_color);

    init_tracing(cli.verbose);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ticket_label=debug,tower_http=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// Dispatches to the handler for the parsed command.
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    let data_dir = cli.data_dir.as_deref();
    match cli.command {
        Commands::Serve { host, port } => handlers::handle_serve(host, port, data_dir, formatter),
        Commands::Init { force } => handlers::handle_init(force, data_dir, formatter),
        Commands::Import { file } => handlers::handle_import(&file, data_dir, formatter),
    }
}

/// Displays an error with any suggestions for fixing it.
fn handle_error(error: &ticket_label::error::TicketLabelError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }
}
