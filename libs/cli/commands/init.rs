use std::path::Path;

use clap::Args;
use taxdoc_config::Config;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
};

#[derive(Args, Debug)]
pub struct Command {
    /// Overwrite an existing config file
    #[clap(long)]
    force: bool,
}

pub fn handle(command: Command, config_path: &str) -> command_error::Result<()> {
    if Path::new(config_path).exists() && !command.force {
        LogBuilder::new(LogType::Info, "A config file already exists")
            .with_branch("Path", config_path.to_owned())
            .with_branch("Hint", "use --force to overwrite it")
            .print();
        return Ok(());
    }

    taxdoc_config::save(config_path, &Config::default())?;

    LogBuilder::new(LogType::Success, "Config file created")
        .with_branch("Path", config_path.to_owned())
        .print();
    Ok(())
}
