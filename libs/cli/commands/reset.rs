use clap::Args;
use taxdoc_core::Core;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    prompt::confirm,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Don't ask for confirmation
    #[clap(long)]
    yes: bool,
}

pub fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    if !command.yes
        && !confirm("This deletes the documents of every tax year. Continue?")?
    {
        println!("Nothing was deleted.");
        return Ok(());
    }

    core.reset()?;

    LogBuilder::new(LogType::Removed, "All tax documents were deleted")
        .with_branch("Storage", core.storage_description())
        .print();
    Ok(())
}
