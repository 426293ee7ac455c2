//! Command handlers.

mod import;
mod init;
mod serve;

pub use import::handle_import;
pub use init::handle_init;
pub use serve::handle_serve;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::storage::FileStorage;

/// Common context for all handler operations
pub struct HandlerContext {
    pub config: Config,
    pub storage: FileStorage,
}

impl HandlerContext {
    /// Loads configuration and opens storage, honoring a data-dir override.
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let mut config = Config::load_or_default()?;
        if let Some(dir) = data_dir {
            config.data.dir = dir.to_path_buf();
        }
        let storage = FileStorage::new(&config.data.dir);

        Ok(Self { config, storage })
    }
}
