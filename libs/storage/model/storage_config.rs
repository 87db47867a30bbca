use serde::de::DeserializeOwned;

use super::storage::{Storage, StorageBox};

/// Backend settings read from a profile table of the configuration file.
pub trait StorageConfig: DeserializeOwned + Default {
    type Storage: Storage;

    fn to_storage(self) -> eyre::Result<StorageBox>;

    /// Build the storage from the raw profile table, unknown keys are ignored.
    fn from_profile(details: &toml::Value) -> eyre::Result<StorageBox> {
        let config: Self = details.clone().try_into()?;
        config.to_storage()
    }
}
