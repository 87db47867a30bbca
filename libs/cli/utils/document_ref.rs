use std::fmt;
use std::str::FromStr;

use colored::Colorize;
use taxdoc_core::{storage::Document, CoreError};

use crate::utils::command_error;

/// Represents a reference to a document of a tax year.
///
/// Either its 1-based position as shown by `taxdoc list`, or its exact name.
/// An all-digit argument can be both, e.g. "2" or "1098".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRef {
    /// All-digit argument, a position starting at 1 or a document name.
    Number(usize, String),
    /// Exact document name, e.g. "W-2".
    Name(String),
}

impl DocumentRef {
    /// Index of the referenced document inside `documents`.
    ///
    /// A number matching a document name exactly refers to that document,
    /// unless the same number is also the position of another document.
    pub fn resolve(&self, year: i32, documents: &[Document]) -> command_error::Result<usize> {
        match self {
            DocumentRef::Number(position, raw) => {
                let by_position = position
                    .checked_sub(1)
                    .filter(|index| *index < documents.len());

                match (name_matches(documents, raw).as_slice(), by_position) {
                    ([index], None) => Ok(*index),
                    ([index], Some(other)) if *index == other => Ok(other),
                    ([index], Some(other)) => Err(eyre::eyre!(
                        "{} {} is ambiguous: document #{} is named '{}' but position {} is '{}'",
                        "✗".red().bold(),
                        self,
                        index + 1,
                        raw.yellow(),
                        position,
                        documents[other].name.yellow()
                    )
                    .into()),
                    ([], Some(index)) => Ok(index),
                    ([], None) if *position == 0 => {
                        Err(eyre::eyre!("document positions start at 1").into())
                    }
                    ([], None) => Err(CoreError::DocumentNotFound {
                        year,
                        index: position - 1,
                    }
                    .into()),
                    (many, _) => Err(duplicate_name_error(raw, many)),
                }
            }
            DocumentRef::Name(name) => match name_matches(documents, name).as_slice() {
                [index] => Ok(*index),
                [] => Err(eyre::eyre!(
                    "{} No document named '{}' in tax year {year}",
                    "✗".red().bold(),
                    name.yellow()
                )
                .into()),
                many => Err(duplicate_name_error(name, many)),
            },
        }
    }
}

fn name_matches(documents: &[Document], name: &str) -> Vec<usize> {
    documents
        .iter()
        .enumerate()
        .filter(|(_, doc)| doc.name == name)
        .map(|(i, _)| i)
        .collect()
}

fn duplicate_name_error(name: &str, indexes: &[usize]) -> command_error::Error {
    let positions: Vec<String> = indexes.iter().map(|i| format!("#{}", i + 1)).collect();
    eyre::eyre!(
        "{} The name '{}' matches several documents ({}), use a position instead",
        "✗".red().bold(),
        name.yellow(),
        positions.join(", ")
    )
    .into()
}

impl FromStr for DocumentRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("document reference cannot be empty".to_owned());
        }

        match s.parse::<usize>() {
            Ok(position) => Ok(DocumentRef::Number(position, s.to_owned())),
            Err(_) => Ok(DocumentRef::Name(s.to_owned())),
        }
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRef::Number(_, raw) => write!(f, "'{raw}'"),
            DocumentRef::Name(name) => write!(f, "'{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<Document> {
        vec![
            Document::new("W-2"),
            Document::new("1099-B"),
            Document::new("1099-B"),
        ]
    }

    fn reference(raw: &str) -> DocumentRef {
        raw.parse().unwrap()
    }

    #[test]
    fn parses_positions_and_names() {
        assert_eq!(reference("2"), DocumentRef::Number(2, "2".to_owned()));
        assert_eq!(reference("W-2"), DocumentRef::Name("W-2".to_owned()));
        assert!("".parse::<DocumentRef>().is_err());
    }

    #[test]
    fn positions_are_one_based() {
        let docs = docs();

        assert!(matches!(reference("1").resolve(2025, &docs), Ok(0)));
        assert!(reference("0").resolve(2025, &docs).is_err());
        assert!(reference("4").resolve(2025, &docs).is_err());
    }

    #[test]
    fn names_must_be_unique() {
        let docs = docs();

        assert!(matches!(reference("W-2").resolve(2025, &docs), Ok(0)));
        assert!(reference("1099-B").resolve(2025, &docs).is_err());
        assert!(reference("w-2").resolve(2025, &docs).is_err());
    }

    #[test]
    fn numeric_names_are_found_past_the_last_position() {
        let docs = vec![Document::new("W-2"), Document::new("1098")];

        assert!(matches!(reference("1098").resolve(2025, &docs), Ok(1)));
    }

    #[test]
    fn numeric_name_at_its_own_position() {
        let docs = vec![Document::new("W-2"), Document::new("2")];

        assert!(matches!(reference("2").resolve(2025, &docs), Ok(1)));
    }

    #[test]
    fn numeric_name_clashing_with_a_position_is_rejected() {
        let docs = vec![
            Document::new("W-2"),
            Document::new("1098"),
            Document::new("2"),
        ];

        let res = reference("2").resolve(2025, &docs);

        match res {
            Err(command_error::Error::ExitWithError(_, report)) => {
                assert!(report.to_string().contains("ambiguous"))
            }
            Ok(index) => panic!("resolved to index {index}"),
        }
    }
}
