use clap::Args;
use taxdoc_core::{storage::format_display_date, Core};

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    document_ref::DocumentRef,
    time::{today, YearArg},
};

#[derive(Args, Debug)]
pub struct Command {
    /// Position (as shown by `taxdoc list`) or exact name of the document
    document: DocumentRef,

    #[command(flatten)]
    year: YearArg,
}

pub fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    let year = command.year.resolve();
    let documents = core.get_year(year)?;
    let index = command.document.resolve(year, &documents)?;

    let doc = core.toggle_document(year, index, today())?;

    let message = if doc.completed {
        format!("Marked '{}' as completed", doc.name)
    } else {
        format!("Marked '{}' as not completed", doc.name)
    };
    LogBuilder::new(LogType::Success, message)
        .with_branch("Received", format_display_date(&doc.actual_date))
        .print();
    Ok(())
}
