//! `init` command: seed the data directory with default files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::cli::OutputFormatter;
use crate::cli::handlers::HandlerContext;
use crate::error::Result;
use crate::storage::FileStorage;

pub fn handle_init(
    force: bool,
    data_dir: Option<&Path>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(data_dir)?;
    fs::create_dir_all(ctx.storage.root())?;

    let seeded = seed_data_files(&ctx.storage, force)?;
    if seeded.is_empty() {
        formatter.info(&format!(
            "Data directory {} is already initialized",
            ctx.storage.root().display()
        ));
    } else {
        formatter.success(&format!(
            "Initialized {} ({})",
            ctx.storage.root().display(),
            seeded.join(", ")
        ));
    }
    Ok(())
}

/// Writes each missing data file (all of them when `force` is set) and
/// returns the names of the files written.
pub(crate) fn seed_data_files(storage: &FileStorage, force: bool) -> Result<Vec<&'static str>> {
    let mut seeded = Vec::new();

    if force || !storage.tickets_path().exists() {
        storage.save_tickets(&[])?;
        seeded.push(crate::storage::TICKETS_FILE);
    }
    if force || !storage.labels_path().exists() {
        storage.save_labels(&[])?;
        seeded.push(crate::storage::LABELS_FILE);
    }
    if force || !storage.label_colors_path().exists() {
        storage.save_label_colors(&HashMap::new())?;
        seeded.push(crate::storage::LABEL_COLORS_FILE);
    }

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::label;
    use tempfile::TempDir;

    #[test]
    fn test_seed_creates_all_files_once() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());

        let seeded = seed_data_files(&storage, false).unwrap();
        assert_eq!(seeded.len(), 3);
        assert_eq!(storage.load_labels(), label::default_labels());
        assert_eq!(storage.load_label_colors(), label::default_colors());
        assert!(storage.load_tickets().is_empty());

        let seeded_again = seed_data_files(&storage, false).unwrap();
        assert!(seeded_again.is_empty());
    }

    #[test]
    fn test_seed_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        storage
            .save_labels(&["自定义".to_string()])
            .unwrap();

        seed_data_files(&storage, true).unwrap();
        assert_eq!(storage.load_labels(), label::default_labels());
    }
}
