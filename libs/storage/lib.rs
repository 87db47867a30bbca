mod model {
    pub(crate) mod database;
    pub(crate) mod document;
    pub(crate) mod errors;
    pub(crate) mod storage;
    pub(crate) mod storage_config;
}

pub use model::{
    database::Database,
    document::{format_display_date, Document, DocumentUpdate},
    errors::{StoreError, StoreResult},
    storage::{Storage, StorageBox},
    storage_config::StorageConfig,
};

pub use patronus::Partial;

pub mod storage {
    pub mod in_memory;
    pub mod json_file;
}

pub(crate) mod utils {
    pub(crate) mod files;
}

/// Storage backends that can be selected from a profile's `storage_type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum BuiltinStorageType {
    /// Single JSON file on disk
    Json,
    /// Nothing is persisted, used for testing
    InMemory,
}
