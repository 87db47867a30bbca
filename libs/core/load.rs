use std::str::FromStr;

use taxdoc_config::ProfileConfig;
use taxdoc_storage::{
    storage::{in_memory::InMemoryStorageConfig, json_file::JsonFileStorageConfig},
    BuiltinStorageType, StorageConfig,
};

use crate::Core;

/// Build a `Core` from the configuration file at `config_path`.
///
/// A missing configuration file isn't an error, the default profile is used.
pub fn load(config_path: &str, profile_name: Option<&str>) -> eyre::Result<Core> {
    let (config, found_config_file) = taxdoc_config::load_or_default(config_path)?;
    let profile = config.get_profile(profile_name)?;

    let storage_type = BuiltinStorageType::from_str(profile.get_storage_type()).map_err(|_| {
        eyre::eyre!(
            "unknown storage type '{}', expected one of: json, in-memory",
            profile.get_storage_type()
        )
    })?;

    let mut core = match storage_type {
        BuiltinStorageType::Json => load_core::<JsonFileStorageConfig>(profile)?,
        BuiltinStorageType::InMemory => load_core::<InMemoryStorageConfig>(profile)?,
    };
    core.found_config_file = found_config_file;

    tracing::debug!("using {}", core.storage_description());
    Ok(core)
}

pub fn load_core<SC>(profile: &ProfileConfig) -> eyre::Result<Core>
where
    SC: StorageConfig,
{
    let storage = SC::from_profile(&profile.details)?;
    Ok(Core::new(storage))
}
