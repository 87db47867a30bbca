use clap::Args;
use taxdoc_core::{
    storage::{format_display_date, DocumentUpdate, Partial},
    Core,
};

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    document_ref::DocumentRef,
    time::{parse_date_string, today, YearArg},
};

#[derive(Args, Debug)]
pub struct Command {
    /// Position (as shown by `taxdoc list`) or exact name of the document
    document: DocumentRef,

    /// New name of the document
    #[clap(long, short)]
    name: Option<String>,

    /// New website, an empty value removes it
    #[clap(long, short)]
    website: Option<String>,

    /// New expected date (YYYY-MM-DD)
    #[clap(long, short, conflicts_with = "clear_expected")]
    expected: Option<String>,

    /// Remove the expected date
    #[clap(long)]
    clear_expected: bool,

    /// Set the completed status
    #[clap(long)]
    completed: Option<bool>,

    #[command(flatten)]
    year: YearArg,
}

pub fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    let year = command.year.resolve();
    let documents = core.get_year(year)?;
    let index = command.document.resolve(year, &documents)?;

    let expected_date = match (&command.expected, command.clear_expected) {
        (_, true) => Some(String::new()),
        (Some(date), false) => Some(parse_date_string(date)?.format("%Y-%m-%d").to_string()),
        (None, false) => None,
    };

    let update = DocumentUpdate::default()
        .set_opt_name(command.name)
        .set_opt_website(command.website)
        .set_opt_expected_date(expected_date)
        .set_opt_completed(command.completed);

    if update.is_empty() {
        LogBuilder::new(LogType::Info, "Nothing to update")
            .with_branch("Hint", "see `taxdoc edit --help` for the editable fields")
            .print();
        return Ok(());
    }

    let doc = core.update_document(year, index, update, today())?;

    LogBuilder::new(LogType::Success, format!("Document '{}' updated", doc.name))
        .with_branch("Expected", format_display_date(&doc.expected_date))
        .with_branch("Completed", doc.completed)
        .with_optional_branch("Website", doc.website_url())
        .print();
    Ok(())
}
