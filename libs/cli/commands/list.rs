use clap::Args;
use colored::Colorize;
use taxdoc_core::{
    group_documents,
    storage::{format_display_date, Document},
    Core, SectionKind, ViewMode,
};

use crate::utils::{display::print_year_header, time::YearArg};

#[derive(Args, Debug)]
pub struct Command {
    #[command(flatten)]
    year: YearArg,

    /// Which documents to show: all, needed or completed
    #[clap(long, short)]
    view: Option<ViewMode>,
}

pub fn handle(command: Command, core: &Core) -> eyre::Result<()> {
    let year = command.year.resolve();
    let documents = core.get_year(year)?;

    print_year_header(year);

    let sections = group_documents(&documents, command.view.unwrap_or_default());
    if sections.is_empty() {
        println!("No documents to show. Add one with `taxdoc add` or run `taxdoc import`.");
        return Ok(());
    }

    for section in sections {
        let title = match section.kind {
            SectionKind::Needed => section.kind.title().yellow().bold(),
            SectionKind::Completed => section.kind.title().green().bold(),
        };
        println!("{title}");

        for (index, doc) in section.entries {
            print_document(index, doc);
        }
        println!();
    }

    Ok(())
}

fn print_document(index: usize, doc: &Document) {
    let check = if doc.completed { "✓".green().bold() } else { " ".normal() };
    println!(
        "  [{check}] {} {}",
        format!("#{}", index + 1).dimmed(),
        doc.name.cyan()
    );
    println!(
        "        expected: {}  last year: {}",
        format_display_date(&doc.expected_date),
        format_display_date(&doc.previous_year_date)
    );
    if doc.completed {
        println!("        received: {}", format_display_date(&doc.actual_date));
    }
    if let Some(url) = doc.website_url() {
        println!("        {}", url.underline());
    }
}
