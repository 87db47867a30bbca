use std::{io::Write, path::Path, path::PathBuf};

use directories_next::ProjectDirs;

use super::Config;

pub fn load(config_path: &str) -> eyre::Result<Config> {
    let content = read_file_content_if_exist(config_path)?
        .ok_or_else(|| eyre::eyre!("config path '{config_path}' was not found"))?;

    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// Load the config file, falling back on the defaults when it doesn't exist.
///
/// The second value is `false` when no file was found.
pub fn load_or_default(config_path: &str) -> eyre::Result<(Config, bool)> {
    match read_file_content_if_exist(config_path)? {
        Some(content) => Ok((toml::from_str(&content)?, true)),
        None => {
            tracing::debug!("no config file at '{config_path}', using defaults");
            Ok((Config::default(), false))
        }
    }
}

fn read_file_content_if_exist(file_path: &str) -> eyre::Result<Option<String>> {
    let path = Path::new(file_path);

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    Ok(Some(content))
}

pub fn save(config_path: &str, config: &Config) -> eyre::Result<()> {
    let toml_string =
        toml::to_string(config).map_err(|e| eyre::eyre!("Failed to serialize config: {e}"))?;

    let path = Path::new(config_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| eyre::eyre!("Failed to create directory {parent:?}: {e}"))?;
    }

    let mut file = std::fs::File::create(path)
        .map_err(|e| eyre::eyre!("Failed to create or truncate file '{config_path}': {e}"))?;

    file.write_all(toml_string.as_bytes())
        .map_err(|e| eyre::eyre!("Failed to write to file '{config_path}': {e}"))?;

    Ok(())
}

/// Default location of the configuration file, e.g. `~/.config/taxdoc/config.toml`
pub fn default_config_path() -> eyre::Result<String> {
    let proj_dirs = ProjectDirs::from("", "", "taxdoc")
        .ok_or_else(|| eyre::eyre!("Project directories could not be found."))?;
    let config_path: PathBuf = proj_dirs.config_dir().join("config.toml");

    let config_path = config_path
        .to_str()
        .map(|t| t.to_owned())
        .ok_or_else(|| eyre::eyre!("couldn't convert os path to string"))?;

    Ok(shellexpand::full(&config_path)?.into_owned())
}
