use std::collections::BTreeMap;

use derive_more::{Deref, DerefMut};
use serde_derive::{Deserialize, Serialize};

use super::document::Document;

/// Every document of every tax year, keyed by the decimal year (`"2024"`).
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, Deref, DerefMut)]
#[serde(transparent)]
pub struct Database(BTreeMap<String, Vec<Document>>);

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(year: i32) -> String {
        year.to_string()
    }

    /// Documents of `year`, empty when the year was never saved.
    pub fn year(&self, year: i32) -> Vec<Document> {
        self.0.get(&Self::key(year)).cloned().unwrap_or_default()
    }

    /// Replace or insert the whole list of `year`.
    pub fn set_year(&mut self, year: i32, documents: Vec<Document>) {
        self.0.insert(Self::key(year), documents);
    }

    /// Stored years in ascending order, keys that are not a year are skipped.
    pub fn years(&self) -> Vec<(i32, usize)> {
        let mut years: Vec<(i32, usize)> = self
            .0
            .iter()
            .filter_map(|(key, docs)| key.parse::<i32>().ok().map(|year| (year, docs.len())))
            .collect();
        years.sort_by_key(|(year, _)| *year);
        years
    }
}

impl From<BTreeMap<String, Vec<Document>>> for Database {
    fn from(value: BTreeMap<String, Vec<Document>>) -> Self {
        Database(value)
    }
}
