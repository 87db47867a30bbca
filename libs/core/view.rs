use taxdoc_storage::Document;

/// Which documents a listing shows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ViewMode {
    #[default]
    All,
    Needed,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Needed,
    Completed,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Needed => "Needed Documents",
            Self::Completed => "Completed Documents",
        }
    }
}

/// Documents of one section, each paired with its index in the year's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub entries: Vec<(usize, &'a Document)>,
}

/// Split a year's documents into the needed section followed by the completed
/// one, keeping the stored order inside each section. Empty sections are left out.
pub fn group_documents(documents: &[Document], mode: ViewMode) -> Vec<Section<'_>> {
    let kinds: &[SectionKind] = match mode {
        ViewMode::All => &[SectionKind::Needed, SectionKind::Completed],
        ViewMode::Needed => &[SectionKind::Needed],
        ViewMode::Completed => &[SectionKind::Completed],
    };

    kinds
        .iter()
        .map(|&kind| Section {
            kind,
            entries: documents
                .iter()
                .enumerate()
                .filter(|(_, doc)| doc.completed == (kind == SectionKind::Completed))
                .collect(),
        })
        .filter(|section| !section.entries.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents_vec;
    use std::str::FromStr;

    fn sample() -> Vec<Document> {
        documents_vec!([
            {"name": "W-2", "completed": true},
            {"name": "1098"},
            {"name": "1099-INT", "completed": true},
            {"name": "1099-DIV"}
        ])
    }

    fn names(section: &Section) -> Vec<(usize, String)> {
        section
            .entries
            .iter()
            .map(|(i, doc)| (*i, doc.name.clone()))
            .collect()
    }

    #[test]
    fn all_lists_needed_first() {
        let docs = sample();
        let sections = group_documents(&docs, ViewMode::All);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Needed);
        assert_eq!(names(&sections[0]), vec![(1, "1098".into()), (3, "1099-DIV".into())]);
        assert_eq!(names(&sections[1]), vec![(0, "W-2".into()), (2, "1099-INT".into())]);
    }

    #[test]
    fn filtered_views() {
        let docs = sample();

        let needed = group_documents(&docs, ViewMode::Needed);
        assert_eq!(needed.len(), 1);
        assert_eq!(needed[0].kind, SectionKind::Needed);

        let completed = group_documents(&docs, ViewMode::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].kind.title(), "Completed Documents");
    }

    #[test]
    fn empty_sections_are_omitted() {
        let docs = documents_vec!([{"name": "W-2"}]);

        let sections = group_documents(&docs, ViewMode::All);

        assert_eq!(sections.len(), 1);
        assert!(group_documents(&[], ViewMode::All).is_empty());
    }

    #[test]
    fn parses_view_names() {
        assert_eq!(ViewMode::from_str("needed").unwrap(), ViewMode::Needed);
        assert_eq!(ViewMode::from_str("Completed").unwrap(), ViewMode::Completed);
        assert!(ViewMode::from_str("late").is_err());
        assert_eq!(ViewMode::default().to_string(), "all");
    }
}
