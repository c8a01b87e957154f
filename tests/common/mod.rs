#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use bizbook::AppState;
use bizbook::adapters::api;
use bizbook::adapters::api::CreatedResponse;
use bizbook::domain::book::Book;
use bizbook::domain::code::EntryCode;
use bizbook::domain::entry::{Entry, EntryFields};
use bizbook::domain::error::StoreError;
use bizbook::store::{NewRecord, RecordStore};
use bizbook::ui::client::{ClientError, EntryApi};
use rand::Rng;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

// ── Record store fake ──────────────────────────────────────────────────────

/// In-memory [`RecordStore`]: per-book vectors in insertion order, ids in the
/// backend's 15-char lowercase style. `set_failing` simulates an unreachable
/// backend.
pub struct InMemoryStore {
    books: Mutex<HashMap<Book, Vec<Entry>>>,
    fail: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Snapshot in insertion order, for assertions.
    pub fn entries(&self, book: Book) -> Vec<Entry> {
        self.books
            .lock()
            .unwrap()
            .get(&book)
            .cloned()
            .unwrap_or_default()
    }

    /// Insert a record directly, bypassing the handlers.
    pub fn seed(&self, book: Book, code: &str, fields: EntryFields) -> Entry {
        let entry = Entry {
            id: next_id(),
            code: EntryCode::new(code),
            fields,
        };
        self.books
            .lock()
            .unwrap()
            .entry(book)
            .or_default()
            .push(entry.clone());
        entry
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("record store unavailable".into()));
        }
        Ok(())
    }
}

fn next_id() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(15)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect()
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn create(&self, book: Book, record: &NewRecord) -> Result<Entry, StoreError> {
        self.check_available()?;
        let entry = Entry {
            id: next_id(),
            code: record.code.clone(),
            fields: record.fields.clone(),
        };
        self.books
            .lock()
            .unwrap()
            .entry(book)
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    async fn list(&self, book: Book) -> Result<Vec<Entry>, StoreError> {
        self.check_available()?;
        // Newest first, like the backend's reverse-creation sort.
        Ok(self.entries(book).into_iter().rev().collect())
    }

    async fn find_by_code(&self, book: Book, code: &str) -> Result<Option<Entry>, StoreError> {
        self.check_available()?;
        Ok(self
            .entries(book)
            .into_iter()
            .find(|e| e.code.as_str() == code))
    }

    async fn update(
        &self,
        book: Book,
        id: &str,
        fields: &EntryFields,
    ) -> Result<Entry, StoreError> {
        self.check_available()?;
        let mut books = self.books.lock().unwrap();
        let entries = books.entry(book).or_default();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        entry.fields = fields.clone();
        Ok(entry.clone())
    }

    async fn delete(&self, book: Book, id: &str) -> Result<(), StoreError> {
        self.check_available()?;
        let mut books = self.books.lock().unwrap();
        let entries = books.entry(book).or_default();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

// ── Entry API fake (for presenter/dialog tests) ────────────────────────────

/// [`EntryApi`] fake that serves canned entries and records every call as
/// `"op:book:arg"`.
#[derive(Default)]
pub struct FakeApi {
    pub entries: Mutex<Vec<Entry>>,
    fail: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_available(&self) -> Result<(), ClientError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClientError::Api {
                status: 500,
                message: "Internal Server Error".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl EntryApi for FakeApi {
    async fn create(
        &self,
        book: Book,
        fields: &EntryFields,
    ) -> Result<CreatedResponse, ClientError> {
        self.record(format!("create:{book}:{}", fields.name));
        self.check_available()?;
        let entry = Entry {
            id: next_id(),
            code: EntryCode::generate(),
            fields: fields.clone(),
        };
        let response = CreatedResponse {
            id: entry.id.clone(),
            code: entry.code.clone(),
        };
        self.entries.lock().unwrap().push(entry);
        Ok(response)
    }

    async fn list(&self, book: Book) -> Result<Vec<Entry>, ClientError> {
        self.record(format!("list:{book}"));
        self.check_available()?;
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn search(&self, book: Book, code: &str) -> Result<Vec<Entry>, ClientError> {
        self.record(format!("search:{book}:{code}"));
        self.check_available()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.code.as_str() == code)
            .take(1)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        book: Book,
        id: &str,
        fields: &EntryFields,
    ) -> Result<(), ClientError> {
        self.record(format!("update:{book}:{id}"));
        self.check_available()?;
        if let Some(entry) = self.entries.lock().unwrap().iter_mut().find(|e| e.id == id) {
            entry.fields = fields.clone();
        }
        Ok(())
    }

    async fn delete(&self, book: Book, id: &str) -> Result<(), ClientError> {
        self.record(format!("delete:{book}:{id}"));
        self.check_available()?;
        self.entries.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }
}

// ── Builders ───────────────────────────────────────────────────────────────

pub fn fields(name: &str, email: &str, phone: &str, address: &str) -> EntryFields {
    EntryFields {
        name: name.to_string(),
        companyname: String::new(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
    }
}

pub fn entry(id: &str, code: &str, name: &str) -> Entry {
    Entry {
        id: id.to_string(),
        code: EntryCode::new(code),
        fields: EntryFields {
            name: name.to_string(),
            ..EntryFields::default()
        },
    }
}

/// Router wired to a fresh in-memory store, plus a handle to the store for
/// assertions.
pub fn app() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState {
        store: store.clone() as Arc<dyn RecordStore>,
    };
    (api::router(state), store)
}
