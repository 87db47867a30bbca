use std::{collections::HashSet, fmt};

use taxdoc_storage::Document;

/// Result of `Core::import_from_previous_year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The previous tax year has no documents, nothing was read from the target year
    NoPreviousDocuments,
    /// Every document of the previous year already exists, nothing was written
    NothingNew,
    Imported { count: usize, from_year: i32 },
}

impl ImportOutcome {
    /// Number of documents appended to the target year
    pub fn count(&self) -> usize {
        match self {
            Self::Imported { count, .. } => *count,
            _ => 0,
        }
    }
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPreviousDocuments => write!(f, "no documents found for the previous year"),
            Self::NothingNew => write!(f, "no new documents to import"),
            Self::Imported { count, from_year } => {
                write!(f, "imported {count} documents from tax year {from_year}")
            }
        }
    }
}

/// Documents of `previous` to append to `current`, in their original order.
///
/// Names are compared exactly (case and whitespace matter). Only the names
/// already in `current` are skipped, so a name repeated inside `previous` is
/// carried as many times as it appears.
pub fn plan_rollover(previous: &[Document], current: &[Document]) -> Vec<Document> {
    let existing: HashSet<&str> = current.iter().map(|doc| doc.name.as_str()).collect();

    previous
        .iter()
        .filter(|doc| !existing.contains(doc.name.as_str()))
        .map(carry_forward)
        .collect()
}

fn carry_forward(doc: &Document) -> Document {
    let previous_year_date = if doc.actual_date.is_empty() {
        doc.expected_date.clone()
    } else {
        doc.actual_date.clone()
    };

    Document {
        name: doc.name.clone(),
        website: doc.website.clone(),
        expected_date: doc.expected_date.clone(),
        actual_date: String::new(),
        previous_year_date,
        completed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents_vec;

    #[test]
    fn carried_documents_start_unfiled() {
        let previous = documents_vec!([{
            "name": "W-2",
            "website": "payroll.example.com",
            "expectedDate": "2024-01-31",
            "actualDate": "2024-02-01",
            "previousYearDate": "2023-02-03",
            "completed": true
        }]);

        let planned = plan_rollover(&previous, &[]);

        assert_eq!(
            planned,
            documents_vec!([{
                "name": "W-2",
                "website": "payroll.example.com",
                "expectedDate": "2024-01-31",
                "actualDate": "",
                "previousYearDate": "2024-02-01",
                "completed": false
            }])
        );
    }

    #[test]
    fn previous_year_date_falls_back_on_expected_date() {
        let previous = documents_vec!([{"name": "1098", "expectedDate": "2024-01-15"}]);

        let planned = plan_rollover(&previous, &[]);

        assert_eq!(planned[0].previous_year_date, "2024-01-15");
    }

    #[test]
    fn existing_names_are_skipped_in_order() {
        let previous = documents_vec!([
            {"name": "W-2"},
            {"name": "1099-INT"},
            {"name": "1098"}
        ]);
        let current = documents_vec!([{"name": "1099-INT", "completed": true}]);

        let names: Vec<String> = plan_rollover(&previous, &current)
            .into_iter()
            .map(|doc| doc.name)
            .collect();

        assert_eq!(names, vec!["W-2", "1098"]);
    }

    #[test]
    fn name_match_is_exact() {
        let previous = documents_vec!([{"name": "w-2"}, {"name": "W-2 "}]);
        let current = documents_vec!([{"name": "W-2"}]);

        assert_eq!(plan_rollover(&previous, &current).len(), 2);
    }

    #[test]
    fn duplicates_inside_previous_year_are_kept() {
        let previous = documents_vec!([{"name": "1099-B"}, {"name": "1099-B"}]);

        assert_eq!(plan_rollover(&previous, &[]).len(), 2);
    }

    #[test]
    fn messages() {
        assert_eq!(
            ImportOutcome::Imported { count: 1, from_year: 2024 }.to_string(),
            "imported 1 documents from tax year 2024"
        );
        assert_eq!(ImportOutcome::NothingNew.to_string(), "no new documents to import");
        assert_eq!(
            ImportOutcome::NoPreviousDocuments.to_string(),
            "no documents found for the previous year"
        );
        assert_eq!(ImportOutcome::NothingNew.count(), 0);
    }
}
