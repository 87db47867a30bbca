use chrono::NaiveDate;
use taxdoc_storage::Document;

/// Flip `completed`, stamping `actual_date` with `today` the first time the
/// document becomes completed.
///
/// Marking a document as not completed keeps its `actual_date`.
pub fn toggle_completed(mut doc: Document, today: NaiveDate) -> Document {
    doc.completed = !doc.completed;
    stamp_actual_date(doc, today)
}

pub(crate) fn stamp_actual_date(mut doc: Document, today: NaiveDate) -> Document {
    if doc.completed && doc.actual_date.is_empty() {
        doc.actual_date = today.format("%Y-%m-%d").to_string();
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    #[test]
    fn completing_stamps_today() {
        let doc = toggle_completed(Document::new("W-2"), today());

        assert!(doc.completed);
        assert_eq!(doc.actual_date, "2025-04-10");
    }

    #[test]
    fn completing_keeps_existing_date() {
        let doc = Document {
            actual_date: "2025-02-01".into(),
            ..Document::new("W-2")
        };

        let doc = toggle_completed(doc, today());

        assert!(doc.completed);
        assert_eq!(doc.actual_date, "2025-02-01");
    }

    #[test]
    fn uncompleting_never_clears_the_date() {
        let doc = toggle_completed(Document::new("W-2"), today());
        let later = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let doc = toggle_completed(doc, later);

        assert!(!doc.completed);
        assert_eq!(doc.actual_date, "2025-04-10");

        let doc = toggle_completed(doc, later);
        assert!(doc.completed);
        assert_eq!(doc.actual_date, "2025-04-10");
    }
}
