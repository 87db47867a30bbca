use clap::Args;
use taxdoc_core::Core;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    document_ref::DocumentRef,
    prompt::confirm,
    time::YearArg,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Position (as shown by `taxdoc list`) or exact name of the document
    document: DocumentRef,

    /// Don't ask for confirmation
    #[clap(long)]
    yes: bool,

    #[command(flatten)]
    year: YearArg,
}

pub fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    let year = command.year.resolve();
    let documents = core.get_year(year)?;
    let index = command.document.resolve(year, &documents)?;

    let name = &documents[index].name;
    if !command.yes && !confirm(&format!("Are you sure you want to delete '{name}'?"))? {
        println!("Nothing was deleted.");
        return Ok(());
    }

    let removed = core.delete_document(year, index)?;

    LogBuilder::new(LogType::Removed, format!("Deleted document '{}'", removed.name))
        .with_branch("Tax year", year)
        .print();
    Ok(())
}
