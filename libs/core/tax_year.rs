use chrono::{Datelike, NaiveDate};

use crate::CoreError;

const MIN_TAX_YEAR: i32 = 1;
const MAX_TAX_YEAR: i32 = 9999;

/// Month in which the filing season for the previous tax year closes.
const FILING_CUTOVER_MONTH: u32 = 4;

/// Tax year being collected on `today`.
///
/// Until the end of March documents still belong to the previous calendar year.
pub fn current_tax_year(today: NaiveDate) -> i32 {
    if today.month() < FILING_CUTOVER_MONTH {
        today.year() - 1
    } else {
        today.year()
    }
}

pub(crate) fn validate_tax_year(year: i32) -> Result<i32, CoreError> {
    if (MIN_TAX_YEAR..=MAX_TAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(CoreError::InvalidTaxYear(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn before_april_is_previous_year() {
        assert_eq!(current_tax_year(date(2025, 1, 1)), 2024);
        assert_eq!(current_tax_year(date(2025, 3, 15)), 2024);
        assert_eq!(current_tax_year(date(2025, 3, 31)), 2024);
    }

    #[test]
    fn from_april_is_same_year() {
        assert_eq!(current_tax_year(date(2025, 4, 1)), 2025);
        assert_eq!(current_tax_year(date(2025, 12, 31)), 2025);
    }

    #[test]
    fn year_bounds() {
        assert_eq!(validate_tax_year(2024), Ok(2024));
        assert_eq!(validate_tax_year(0), Err(CoreError::InvalidTaxYear(0)));
        assert_eq!(validate_tax_year(-3), Err(CoreError::InvalidTaxYear(-3)));
        assert_eq!(validate_tax_year(10_000), Err(CoreError::InvalidTaxYear(10_000)));
    }
}
