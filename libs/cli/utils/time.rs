use chrono::{Local, NaiveDate};
use clap::Args;
use taxdoc_core::current_tax_year;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date_string(date_str: &str) -> eyre::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        eyre::eyre!("Invalid date format '{}': {}. Use YYYY-MM-DD.", date_str, e)
    })
}

#[derive(Clone, Args, Debug)]
pub struct YearArg {
    /// Tax year to work on (default: the tax year currently being collected)
    #[clap(long, short)]
    pub year: Option<i32>,
}

impl YearArg {
    pub fn resolve(&self) -> i32 {
        self.year.unwrap_or_else(|| current_tax_year(today()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_date_string("2025-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert!(parse_date_string("01/31/2025").is_err());
        assert!(parse_date_string("2025-02-30").is_err());
    }

    #[test]
    fn explicit_year_wins() {
        assert_eq!(YearArg { year: Some(2019) }.resolve(), 2019);
    }
}
