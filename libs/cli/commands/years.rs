use clap::Args;
use colored::Colorize;
use taxdoc_core::Core;

#[derive(Args, Debug)]
pub struct Command {}

pub fn handle(_: Command, core: &Core) -> eyre::Result<()> {
    let years = core.list_years();

    if years.is_empty() {
        println!("No tax year has documents yet.");
        return Ok(());
    }

    for (year, count) in years {
        println!("{} {}", year.to_string().bold(), format!("({count} documents)").dimmed());
    }
    Ok(())
}
