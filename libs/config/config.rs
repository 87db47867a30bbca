use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_PROFILE_NAME: &str = "default";
const DEFAULT_STORAGE_TYPE: &str = "json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CoreConfig {
    /// Profile used by default when none are specified
    pub default_profile_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// Type of storage (e.g. json)
    pub storage_type: Option<String>,

    // Rest of the storage config as a flexible structure
    #[serde(flatten)]
    pub details: toml::Value,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub profile: HashMap<String, ProfileConfig>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            storage_type: Some(DEFAULT_STORAGE_TYPE.to_owned()),
            details: toml::Value::Table(toml::map::Map::new()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            core: CoreConfig {
                default_profile_name: Some(DEFAULT_PROFILE_NAME.to_owned()),
            },
            profile: sugars::hmap! { DEFAULT_PROFILE_NAME.to_owned() => ProfileConfig::default() },
        }
    }
}

impl Config {
    /// Return the requested profile, or the default one when `name` is `None`.
    pub fn get_profile(&self, name: Option<&str>) -> eyre::Result<&ProfileConfig> {
        let profile_name = name
            .map(str::to_owned)
            .unwrap_or_else(|| self.core.get_default_profile_name());

        self.profile
            .get(&profile_name)
            .ok_or_else(|| eyre::eyre!("Profile '{profile_name}' not found in config"))
    }
}

impl CoreConfig {
    /// Return the default profile name is set or "default"
    pub fn get_default_profile_name(&self) -> String {
        self.default_profile_name
            .clone()
            .unwrap_or(DEFAULT_PROFILE_NAME.to_owned())
    }
}

impl ProfileConfig {
    pub fn get_storage_type(&self) -> &str {
        self.storage_type.as_deref().unwrap_or(DEFAULT_STORAGE_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_profiles_and_keeps_storage_details() {
        let config: Config = toml::from_str(
            r#"
            [core]
            default_profile_name = "home"

            [profile.home]
            storage_type = "json"
            storage_location = "~/taxes"
            "#,
        )
        .unwrap();

        let profile = config.get_profile(None).unwrap();
        assert_eq!(profile.get_storage_type(), "json");
        assert_eq!(
            profile.details.get("storage_location").and_then(|v| v.as_str()),
            Some("~/taxes")
        );
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let config = Config::default();

        assert!(config.get_profile(Some("work")).is_err());
        assert!(config.get_profile(None).is_ok());
    }

    #[test]
    fn storage_type_defaults_to_json() {
        let config: Config = toml::from_str("[profile.default]\n").unwrap();

        assert_eq!(config.get_profile(None).unwrap().get_storage_type(), "json");
    }
}
