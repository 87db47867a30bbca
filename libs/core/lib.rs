use chrono::NaiveDate;
use taxdoc_storage::{Database, Document, DocumentUpdate, Partial, StorageBox};
use typed_builder::TypedBuilder;

mod errors;
mod load;
mod rollover;
mod status;
mod tax_year;
mod view;

#[cfg(test)]
mod test_utilities;

pub use errors::CoreError;
pub use load::{load, load_core};
pub use rollover::{plan_rollover, ImportOutcome};
pub use status::toggle_completed;
pub use tax_year::current_tax_year;
pub use view::{group_documents, Section, SectionKind, ViewMode};

pub use taxdoc_storage as storage;

pub struct Core {
    storage: StorageBox,
    found_config_file: bool,
}

/// Input of `Core::add_document`
#[derive(Debug, Clone, TypedBuilder)]
pub struct NewDocument {
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(into))]
    pub website: String,
    #[builder(default)]
    pub expected_date: Option<NaiveDate>,
}

impl Core {
    pub fn new(storage: StorageBox) -> Self {
        Core {
            storage,
            found_config_file: true,
        }
    }

    /// Documents of `year`, empty if nothing was ever saved for it.
    pub fn get_year(&self, year: i32) -> eyre::Result<Vec<Document>> {
        let year = tax_year::validate_tax_year(year)?;
        Ok(self.storage.load_all().year(year))
    }

    /// Replace the whole list of `year`.
    pub fn set_year(&self, year: i32, documents: Vec<Document>) -> eyre::Result<()> {
        let year = tax_year::validate_tax_year(year)?;
        let mut db = self.storage.load_all();
        db.set_year(year, documents);
        self.storage.save_all(&db)?;
        Ok(())
    }

    pub fn all_documents(&self) -> Database {
        self.storage.load_all()
    }

    /// Stored years with their number of documents, oldest first.
    pub fn list_years(&self) -> Vec<(i32, usize)> {
        self.storage.load_all().years()
    }

    /// Carry the documents of `target_year - 1` that `target_year` doesn't
    /// list yet. Nothing is written unless at least one document is added.
    pub fn import_from_previous_year(&self, target_year: i32) -> eyre::Result<ImportOutcome> {
        let target_year = tax_year::validate_tax_year(target_year)?;
        let previous_year = tax_year::validate_tax_year(target_year - 1)?;

        let previous = self.get_year(previous_year)?;
        if previous.is_empty() {
            return Ok(ImportOutcome::NoPreviousDocuments);
        }

        let mut current = self.get_year(target_year)?;
        let carried = plan_rollover(&previous, &current);
        if carried.is_empty() {
            return Ok(ImportOutcome::NothingNew);
        }

        let count = carried.len();
        current.extend(carried);
        self.set_year(target_year, current)?;

        tracing::info!("imported {count} documents from {previous_year} into {target_year}");
        Ok(ImportOutcome::Imported {
            count,
            from_year: previous_year,
        })
    }

    /// Append a document to `year`, returning its index.
    pub fn add_document(&self, year: i32, input: NewDocument) -> eyre::Result<usize> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyDocumentName.into());
        }

        let mut documents = self.get_year(year)?;
        documents.push(Document {
            name: name.to_owned(),
            website: input.website.trim().to_owned(),
            expected_date: input
                .expected_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            ..Default::default()
        });
        let index = documents.len() - 1;
        self.set_year(year, documents)?;
        Ok(index)
    }

    /// Apply `update` to the document at `index`.
    ///
    /// The previous year date can't be edited. A document left completed
    /// without an actual date gets `today`.
    pub fn update_document(
        &self,
        year: i32,
        index: usize,
        update: DocumentUpdate,
        today: NaiveDate,
    ) -> eyre::Result<Document> {
        let mut update = update.unset_previous_year_date();
        if let Some(name) = update.name.take() {
            let name = name.trim();
            if name.is_empty() {
                return Err(CoreError::EmptyDocumentName.into());
            }
            update = update.set_name(name);
        }
        if let Some(website) = update.website.take() {
            update = update.set_website(website.trim());
        }

        self.modify_document(year, index, |doc| {
            status::stamp_actual_date(update.merge_with(doc), today)
        })
    }

    /// Flip the completed flag of the document at `index`, see `toggle_completed`.
    pub fn toggle_document(&self, year: i32, index: usize, today: NaiveDate) -> eyre::Result<Document> {
        self.modify_document(year, index, |doc| toggle_completed(doc.clone(), today))
    }

    /// Remove the document at `index` and return it.
    pub fn delete_document(&self, year: i32, index: usize) -> eyre::Result<Document> {
        let mut documents = self.get_year(year)?;
        if index >= documents.len() {
            return Err(CoreError::DocumentNotFound { year, index }.into());
        }
        let removed = documents.remove(index);
        self.set_year(year, documents)?;
        Ok(removed)
    }

    /// Delete every persisted document of every year.
    pub fn reset(&self) -> eyre::Result<()> {
        self.storage.reset()?;
        tracing::info!("all tax documents were removed");
        Ok(())
    }

    pub fn storage_description(&self) -> String {
        self.storage.debug_message()
    }

    pub fn has_found_config_file(&self) -> bool {
        self.found_config_file
    }

    fn modify_document<F>(&self, year: i32, index: usize, f: F) -> eyre::Result<Document>
    where
        F: FnOnce(&Document) -> Document,
    {
        let mut documents = self.get_year(year)?;
        let slot = documents
            .get_mut(index)
            .ok_or(CoreError::DocumentNotFound { year, index })?;
        *slot = f(slot);
        let updated = slot.clone();
        self.set_year(year, documents)?;
        Ok(updated)
    }
}
