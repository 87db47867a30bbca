use derive_more::{Deref, DerefMut};

use super::{database::Database, errors::StoreResult};

#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct StorageBox(Box<dyn Storage>);

impl StorageBox {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self(Box::new(storage))
    }
}

/// Whole-database persistence, every call is a full read or a full rewrite.
pub trait Storage: Send + Sync {
    fn debug_message(&self) -> String;

    /// Read the whole database.
    ///
    /// Never fails: a missing or unreadable resource is an empty database.
    fn load_all(&self) -> Database;

    /// Overwrite the persisted database with `db`.
    fn save_all(&self, db: &Database) -> StoreResult<()>;

    /// Drop every persisted document.
    fn reset(&self) -> StoreResult<()>;
}

impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    fn debug_message(&self) -> String {
        (**self).debug_message()
    }

    fn load_all(&self) -> Database {
        (**self).load_all()
    }

    fn save_all(&self, db: &Database) -> StoreResult<()> {
        (**self).save_all(db)
    }

    fn reset(&self) -> StoreResult<()> {
        (**self).reset()
    }
}
