use clap::Args;
use taxdoc_core::{current_tax_year, Core};

use crate::utils::{
    display::{LogBuilder, LogType},
    time::today,
};

#[derive(Args, Debug)]
pub struct Command {}

pub fn handle(_: Command, core: &Core) -> eyre::Result<()> {
    let year = current_tax_year(today());
    let documents = core.get_year(year)?;
    let received = documents.iter().filter(|doc| doc.completed).count();

    LogBuilder::new(LogType::Info, format!("Tax Year {year}"))
        .with_branch("Due", year + 1)
        .with_branch("Received", format!("{received} of {}", documents.len()))
        .print();
    Ok(())
}
