use clap::Args;
use taxdoc_core::{Core, NewDocument};

use crate::utils::{
    display::{LogBuilder, LogType},
    time::{parse_date_string, YearArg},
};

#[derive(Args, Debug)]
pub struct Command {
    /// Name of the document, e.g. "W-2 from Employer"
    name: String,

    /// Website where the document can be downloaded
    #[clap(long, short)]
    website: Option<String>,

    /// Date the document is expected on (YYYY-MM-DD)
    #[clap(long, short)]
    expected: Option<String>,

    #[command(flatten)]
    year: YearArg,
}

pub fn handle(command: Command, core: &Core) -> eyre::Result<()> {
    let year = command.year.resolve();
    let expected_date = command
        .expected
        .as_deref()
        .map(parse_date_string)
        .transpose()?;

    let index = core.add_document(
        year,
        NewDocument::builder()
            .name(command.name)
            .website(command.website.unwrap_or_default())
            .expected_date(expected_date)
            .build(),
    )?;

    let documents = core.get_year(year)?;
    let doc = &documents[index];
    LogBuilder::new(LogType::Success, format!("Document '{}' added", doc.name))
        .with_branch("Position", format!("#{}", index + 1))
        .with_branch("Tax year", year)
        .with_optional_branch("Website", doc.website_url())
        .print();
    Ok(())
}
