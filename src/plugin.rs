//! Start-up hook for the Corner Store plugin.
//!
//! The host awaits [`CornerStore::on_load`] once its database is available.
//! It must run before anything else reads or re-registers the stimulator
//! buffs table. Failures are logged and swallowed: broken third-party content
//! never stops host start-up.

use log::{error, info};
use std::path::{Path, PathBuf};

use crate::buffs::{catalog_path, BuffError, BuffInjector, InjectReport};
use crate::host::EffectTableWriter;

/// Closing line logged once the plugin content is in place.
pub const LOADED_MESSAGE: &str = "Shelves stocked and spirits await.";

/// The plugin, rooted at its install directory.
#[derive(Debug, Clone)]
pub struct CornerStore {
    mod_dir: PathBuf,
    injector: BuffInjector,
}

impl CornerStore {
    pub fn new<P: AsRef<Path>>(mod_dir: P) -> Self {
        Self {
            mod_dir: mod_dir.as_ref().to_path_buf(),
            injector: BuffInjector::new(),
        }
    }

    pub fn mod_dir(&self) -> &Path {
        &self.mod_dir
    }

    /// Where the custom buff catalog is expected.
    pub fn catalog_path(&self) -> PathBuf {
        catalog_path(&self.mod_dir)
    }

    /// Inject custom buffs and hand back the typed outcome.
    pub fn inject_buffs<T>(&self, table: &mut T) -> Result<InjectReport, BuffError>
    where
        T: EffectTableWriter + ?Sized,
    {
        self.injector.inject_from_file(self.catalog_path(), table)
    }

    /// Run the start-up hook. Never fails; returns the report on success.
    pub async fn on_load<T>(&self, table: &mut T) -> Option<InjectReport>
    where
        T: EffectTableWriter + ?Sized,
    {
        match self.inject_buffs(table) {
            Ok(report) => {
                info!(
                    "Custom buffs loaded: {} group(s) injected",
                    report.groups_injected()
                );
                info!("{}", LOADED_MESSAGE);
                Some(report)
            }
            Err(BuffError::NotFound { path }) => {
                error!("Custom buff file not found at {}", path.display());
                None
            }
            Err(BuffError::EmptyCatalog { path }) => {
                error!("No buffs found in custom buff file {}", path.display());
                None
            }
            Err(e @ BuffError::Parse { .. }) => {
                error!("Invalid custom buff file: {}", e);
                None
            }
            Err(e) => {
                error!("Failed to inject custom buffs: {}", e);
                None
            }
        }
    }
}
