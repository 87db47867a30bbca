use std::path::{Path, PathBuf};

use directories_next::{ProjectDirs, UserDirs};
use serde_derive::Deserialize;

use crate::{
    utils::files, Database, Storage, StorageBox, StorageConfig, StoreResult,
};

pub const DATA_FILE_NAME: &str = "tax_documents_data.json";
const DEFAULT_DIRECTORY_NAME: &str = "Tax Doc Helper";

/// Keep the whole database in a single json file
pub struct JsonFileStorage {
    path: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
pub struct JsonFileStorageConfig {
    /// Directory holding the data file (default to ~/Documents/Tax Doc Helper)
    storage_location: Option<String>,
}

impl JsonFileStorageConfig {
    pub fn get_storage_directory(&self) -> eyre::Result<PathBuf> {
        match &self.storage_location {
            Some(raw) => Ok(PathBuf::from(shellexpand::full(raw)?.into_owned())),
            None => default_storage_directory(),
        }
    }

    pub fn get_data_file_path(&self) -> eyre::Result<PathBuf> {
        Ok(self.get_storage_directory()?.join(DATA_FILE_NAME))
    }
}

fn default_storage_directory() -> eyre::Result<PathBuf> {
    if let Some(documents) = UserDirs::new().and_then(|dirs| dirs.document_dir().map(Path::to_path_buf)) {
        return Ok(documents.join(DEFAULT_DIRECTORY_NAME));
    }

    ProjectDirs::from("", "", "taxdoc")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| eyre::eyre!("Couldn't find a directory to store tax documents in"))
}

impl StorageConfig for JsonFileStorageConfig {
    type Storage = JsonFileStorage;

    fn to_storage(self) -> eyre::Result<StorageBox> {
        Ok(StorageBox::new(JsonFileStorage::new(self.get_data_file_path()?)))
    }
}

impl Storage for JsonFileStorage {
    fn debug_message(&self) -> String {
        format!("json file storage at {:?}", self.path)
    }

    fn load_all(&self) -> Database {
        match files::read_json_document::<Database, _>(&self.path) {
            Ok(Some(db)) => {
                tracing::debug!("loaded {} tax years from {:?}", db.len(), self.path);
                db
            }
            Ok(None) => {
                tracing::debug!("no data file at {:?}, starting empty", self.path);
                Database::new()
            }
            Err(e) => {
                tracing::warn!("Error reading {:?}, returning empty data: {e}", self.path);
                Database::new()
            }
        }
    }

    fn save_all(&self, db: &Database) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            files::create_dir_if_not_exists_deep(parent)?;
        }
        files::save_json_document(&self.path, db)?;
        tracing::debug!("saved {} tax years to {:?}", db.len(), self.path);
        Ok(())
    }

    fn reset(&self) -> StoreResult<()> {
        files::remove_file_if_exists(&self.path)
    }
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
