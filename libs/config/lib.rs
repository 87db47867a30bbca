mod config;
mod load_config;

pub use config::{Config, CoreConfig, ProfileConfig, DEFAULT_PROFILE_NAME};
pub use load_config::{default_config_path, load, load_or_default, save};
