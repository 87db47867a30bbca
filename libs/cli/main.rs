use clap::Parser;
use colored::Colorize;
use utils::{command_error, exit_code::ExitCode};

mod commands;
mod tracing;
mod utils;

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "taxdoc",
    version,
    long_about = Some("Keep track of the tax documents you expect to receive, year after year.")
)]
struct Args {
    /// Profile to use
    #[arg(long, global = true)]
    profile_name: Option<String>,

    /// Path of configuration file (default: "~/.config/taxdoc/config.toml")
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: commands::Command,
}

impl Args {
    fn get_config_path(&self) -> eyre::Result<String> {
        match &self.config {
            Some(x) => Ok(shellexpand::full(x)?.into_owned()),
            None => taxdoc_config::default_config_path(),
        }
    }
}

fn run(args: Args) -> command_error::Result<()> {
    color_eyre::install()?;
    tracing::setup(args.debug)?;

    let config_path = args.get_config_path()?;
    args.command
        .execute(&config_path, args.profile_name.as_deref())
}

pub fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::Success,
        Err(command_error::Error::ExitWithError(code, report)) => {
            eprintln!("{} {report:?}", "error:".red().bold());
            code
        }
    }
}
