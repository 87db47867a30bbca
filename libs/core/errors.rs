use thiserror::Error;

/// Rejected inputs, returned inside `eyre::Report` by the `Core` operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid tax year {0}, expected a year between 1 and 9999")]
    InvalidTaxYear(i32),
    #[error("document name cannot be empty")]
    EmptyDocumentName,
    #[error("no document at position {} in tax year {year}", .index.saturating_add(1))]
    DocumentNotFound { year: i32, index: usize },
}
