//! `serve` command: run the HTTP server.

use std::fs;
use std::path::Path;

use crate::api;
use crate::cli::OutputFormatter;
use crate::cli::handlers::{HandlerContext, init::seed_data_files};
use crate::error::{Result, TicketLabelError};

pub fn handle_serve(
    host: Option<String>,
    port: Option<u16>,
    data_dir: Option<&Path>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let mut ctx = HandlerContext::new(data_dir)?;
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    fs::create_dir_all(ctx.storage.root())?;
    seed_data_files(&ctx.storage, false)?;

    formatter.info(&format!(
        "Serving on http://{}:{} (data: {})",
        ctx.config.server.host,
        ctx.config.server.port,
        ctx.storage.root().display()
    ));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(api::serve(&ctx.config, ctx.storage))
        .map_err(|err| TicketLabelError::custom(err.to_string()))
}
