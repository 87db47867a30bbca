use clap::Args;
use taxdoc_core::Core;

#[derive(Args, Debug)]
pub struct Command {
    /// Only print this tax year
    #[clap(long, short)]
    year: Option<i32>,
}

pub fn handle(command: Command, core: &Core) -> eyre::Result<()> {
    let output = match command.year {
        Some(year) => serde_json::to_string_pretty(&core.get_year(year)?)?,
        None => serde_json::to_string_pretty(&core.all_documents())?,
    };

    println!("{output}");
    Ok(())
}
