use clap::Args;
use taxdoc_core::{Core, ImportOutcome};

use crate::utils::{
    display::{LogBuilder, LogType},
    time::YearArg,
};

#[derive(Args, Debug)]
pub struct Command {
    #[command(flatten)]
    year: YearArg,
}

pub fn handle(command: Command, core: &Core) -> eyre::Result<()> {
    let year = command.year.resolve();
    let outcome = core.import_from_previous_year(year)?;

    let log_type = match outcome {
        ImportOutcome::Imported { .. } => LogType::Success,
        _ => LogType::Info,
    };
    LogBuilder::new(log_type, &outcome)
        .with_branch("Tax year", year)
        .with_branch("Imported", outcome.count())
        .print();
    Ok(())
}
