use clap::Subcommand;

use crate::utils::{command_error, exit_code::ExitCode};

pub mod add;
pub mod delete;
pub mod dump;
pub mod edit;
pub mod import;
pub mod init;
pub mod list;
pub mod reset;
pub mod toggle;
pub mod year;
pub mod years;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a default config file
    Init(init::Command),
    /// Show the tax year currently being collected
    Year(year::Command),
    /// List the documents of a tax year
    List(list::Command),
    /// Add a document to a tax year
    Add(add::Command),
    /// Update a document information
    Edit(edit::Command),
    /// Mark a document as received, or as not received anymore
    Toggle(toggle::Command),
    /// Remove a document
    Delete(delete::Command),
    /// Copy the documents of the previous tax year that are not listed yet
    Import(import::Command),
    /// List the tax years that have documents
    Years(years::Command),
    /// Print the stored data as json
    Dump(dump::Command),
    /// Delete all stored documents
    Reset(reset::Command),
}

impl Command {
    pub fn execute(self, config_path: &str, profile_name: Option<&str>) -> command_error::Result<()> {
        let command = match self {
            Self::Init(o) => return init::handle(o, config_path),
            command => command,
        };

        let core = taxdoc_core::load(config_path, profile_name).map_err(|e| {
            command_error::Error::ExitWithError(
                ExitCode::ConfigError,
                e.wrap_err(format!("Couldn't load configuration from '{config_path}'")),
            )
        })?;

        if !core.has_found_config_file() {
            tracing::debug!("no config file at '{config_path}', run `taxdoc init` to create one");
        }

        match command {
            Self::Init(_) => {}
            Self::Year(o) => year::handle(o, &core)?,
            Self::List(o) => list::handle(o, &core)?,
            Self::Add(o) => add::handle(o, &core)?,
            Self::Edit(o) => edit::handle(o, &core)?,
            Self::Toggle(o) => toggle::handle(o, &core)?,
            Self::Delete(o) => delete::handle(o, &core)?,
            Self::Import(o) => import::handle(o, &core)?,
            Self::Years(o) => years::handle(o, &core)?,
            Self::Dump(o) => dump::handle(o, &core)?,
            Self::Reset(o) => reset::handle(o, &core)?,
        };

        Ok(())
    }
}
