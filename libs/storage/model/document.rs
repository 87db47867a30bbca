use chrono::NaiveDate;
use patronus::patronus;
use serde::{de::DeserializeOwned, Deserializer};
use serde_derive::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// One expected tax document for one tax year.
///
/// Dates are kept as ISO-8601 strings, an empty string meaning "unset", so
/// that whatever was on disk is written back untouched.
#[patronus(name = "DocumentUpdate", derives = "Debug, Default, Clone, PartialEq")]
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub website: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub expected_date: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub actual_date: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub previous_year_date: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub completed: bool,
}

/// Missing, `null` or wrongly typed values fall back to the field default,
/// so one malformed field doesn't make the whole database unreadable.
fn lenient_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }

    match serde_json::from_value(value) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!("ignoring malformed document field: {e}");
            Ok(T::default())
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Document {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn expected_date(&self) -> Option<NaiveDate> {
        parse_date(&self.expected_date)
    }

    pub fn actual_date(&self) -> Option<NaiveDate> {
        parse_date(&self.actual_date)
    }

    pub fn previous_year_date(&self) -> Option<NaiveDate> {
        parse_date(&self.previous_year_date)
    }

    /// Website ready to be opened, `https://` is assumed when no scheme is given.
    pub fn website_url(&self) -> Option<String> {
        let website = self.website.trim();
        if website.is_empty() {
            None
        } else if website.starts_with("http://") || website.starts_with("https://") {
            Some(website.to_owned())
        } else {
            Some(format!("https://{website}"))
        }
    }
}

/// Render a stored date for humans, e.g. `Feb 01, 2024`.
///
/// Values that are not ISO dates are shown as they are.
pub fn format_display_date(value: &str) -> String {
    if value.is_empty() {
        return "No date set".to_owned();
    }

    match parse_date(value) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patronus::Partial;

    #[test]
    fn partial_record_is_filled_with_defaults() {
        let doc: Document = serde_json::from_value(serde_json::json!({"name": "W-2"})).unwrap();

        assert_eq!(doc, Document::new("W-2"));
    }

    #[test]
    fn null_fields_are_read_as_defaults() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "name": "1099-INT",
            "website": null,
            "expectedDate": null,
            "completed": null
        }))
        .unwrap();

        assert_eq!(doc.website, "");
        assert_eq!(doc.expected_date, "");
        assert!(!doc.completed);
    }

    #[test]
    fn wrongly_typed_fields_are_read_as_defaults() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "name": "1098",
            "website": 42,
            "expectedDate": ["2025-01-31"],
            "completed": "yes"
        }))
        .unwrap();

        assert_eq!(doc, Document::new("1098"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "name": "W-2",
            "notes": "from the old app",
            "completed": true
        }))
        .unwrap();

        assert_eq!(doc.name, "W-2");
        assert!(doc.completed);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let doc = Document {
            name: "W-2".into(),
            previous_year_date: "2024-02-01".into(),
            ..Default::default()
        };

        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "W-2",
                "website": "",
                "expectedDate": "",
                "actualDate": "",
                "previousYearDate": "2024-02-01",
                "completed": false
            })
        );
    }

    #[test]
    fn website_url_prepends_scheme() {
        let mut doc = Document::new("W-2");
        assert_eq!(doc.website_url(), None);

        doc.website = "payroll.example.com".into();
        assert_eq!(doc.website_url().as_deref(), Some("https://payroll.example.com"));

        doc.website = "http://bank.example.com/tax".into();
        assert_eq!(doc.website_url().as_deref(), Some("http://bank.example.com/tax"));
    }

    #[test]
    fn date_accessors_ignore_malformed_values() {
        let doc = Document {
            expected_date: "2025-01-31".into(),
            actual_date: "end of january".into(),
            ..Document::new("W-2")
        };

        assert_eq!(doc.expected_date(), NaiveDate::from_ymd_opt(2025, 1, 31));
        assert_eq!(doc.actual_date(), None);
        assert_eq!(doc.previous_year_date(), None);
    }

    #[test]
    fn display_dates() {
        assert_eq!(format_display_date(""), "No date set");
        assert_eq!(format_display_date("2024-02-01"), "Feb 01, 2024");
        assert_eq!(format_display_date("soon"), "soon");
    }

    #[test]
    fn update_merges_only_set_fields() {
        let base = Document {
            website: "example.com".into(),
            previous_year_date: "2024-02-01".into(),
            ..Document::new("W-2")
        };

        let update = DocumentUpdate::default()
            .set_name("W-2 (Acme)")
            .set_completed(true);
        assert!(!update.is_empty());

        let merged = update.merge_with(&base);

        assert_eq!(merged.name, "W-2 (Acme)");
        assert_eq!(merged.website, "example.com");
        assert_eq!(merged.previous_year_date, "2024-02-01");
        assert!(merged.completed);
        assert!(DocumentUpdate::default().is_empty());
    }
}
