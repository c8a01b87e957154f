pub mod remote;

use {
    crate::domain::{
        book::Book,
        code::EntryCode,
        entry::{Entry, EntryFields},
        error::StoreError,
    },
    async_trait::async_trait,
};

/// Payload for a create: the generated code plus the user-supplied fields.
/// The store assigns the `id` itself.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub code: EntryCode,
    pub fields: EntryFields,
}

/// The external record store, one instance injected into the handlers at
/// wiring time so tests can substitute a fake.
///
/// `update` replaces all mutable fields of whatever is currently stored under
/// `id` — last writer wins, there is no version token.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create(&self, book: Book, record: &NewRecord) -> Result<Entry, StoreError>;

    /// All entries of the collection, newest first where the backend can sort.
    async fn list(&self, book: Book) -> Result<Vec<Entry>, StoreError>;

    /// At most one entry whose code matches exactly.
    async fn find_by_code(&self, book: Book, code: &str) -> Result<Option<Entry>, StoreError>;

    async fn update(&self, book: Book, id: &str, fields: &EntryFields)
    -> Result<Entry, StoreError>;

    async fn delete(&self, book: Book, id: &str) -> Result<(), StoreError>;
}
