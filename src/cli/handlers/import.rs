//! `import` command: bulk import tickets from a CSV file on disk.

use std::fs;
use std::path::Path;

use crate::cli::OutputFormatter;
use crate::cli::handlers::HandlerContext;
use crate::error::Result;
use crate::import::import_csv;

pub fn handle_import(
    file: &Path,
    data_dir: Option<&Path>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(data_dir)?;
    fs::create_dir_all(ctx.storage.root())?;

    let bytes = fs::read(file)?;
    let report = import_csv(&ctx.storage, &bytes)?;

    formatter.success(&format!(
        "imported {} tickets ({} rows skipped)",
        report.added, report.skipped
    ));
    Ok(())
}
