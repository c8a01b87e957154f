//! The entry form modal: closed, creating a new entry, or editing an
//! existing one. Submitting goes through [`EntryApi`]; on success the dialog
//! closes and the caller is expected to reload its presenter.

use {
    super::client::{ClientError, EntryApi},
    crate::{
        adapters::api::CreatedResponse,
        domain::{book::Book, entry::Entry, entry::EntryFields},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Closed,
    /// All fields blank.
    Create,
    /// Fields prefilled from the selected row; holds its store id.
    Edit { id: String },
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Created(CreatedResponse),
    Updated,
}

pub struct EntryForm {
    mode: DialogMode,
    pub fields: EntryFields,
}

impl EntryForm {
    pub fn new() -> Self {
        Self {
            mode: DialogMode::Closed,
            fields: EntryFields::default(),
        }
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != DialogMode::Closed
    }

    pub fn open_create(&mut self) {
        self.mode = DialogMode::Create;
        self.fields = EntryFields::default();
    }

    pub fn open_edit(&mut self, entry: &Entry) {
        self.mode = DialogMode::Edit {
            id: entry.id.clone(),
        };
        self.fields = entry.fields.clone();
    }

    pub fn close(&mut self) {
        self.mode = DialogMode::Closed;
        self.fields = EntryFields::default();
    }

    /// Create or update with the current field values, then close. An error
    /// leaves the dialog open with the fields intact so the user can retry.
    /// `Ok(None)` means the dialog wasn't open and nothing happened.
    pub async fn submit(
        &mut self,
        api: &dyn EntryApi,
        book: Book,
    ) -> Result<Option<SubmitOutcome>, ClientError> {
        let outcome = match &self.mode {
            DialogMode::Closed => {
                tracing::warn!("submit on closed dialog ignored");
                return Ok(None);
            }
            DialogMode::Create => {
                let created = api.create(book, &self.fields).await?;
                SubmitOutcome::Created(created)
            }
            DialogMode::Edit { id } => {
                api.update(book, id, &self.fields).await?;
                SubmitOutcome::Updated
            }
        };
        self.close();
        Ok(Some(outcome))
    }

    /// Delete the entry being edited, then close. Only meaningful in edit
    /// mode; returns whether a delete was performed.
    pub async fn delete(&mut self, api: &dyn EntryApi, book: Book) -> Result<bool, ClientError> {
        let DialogMode::Edit { id } = &self.mode else {
            return Ok(false);
        };
        let id = id.clone();
        api.delete(book, &id).await?;
        self.close();
        Ok(true)
    }

    /// Invoice convenience: look up a customer in the address book by code
    /// and copy its fields into the form. No link between the records is
    /// created. A miss or a lookup error leaves the form untouched.
    pub async fn prefill_from_customer(&mut self, api: &dyn EntryApi, code: &str) -> bool {
        match api.search(Book::Addressbook, code).await {
            Ok(hits) => match hits.into_iter().next() {
                Some(customer) => {
                    self.fields = customer.fields;
                    true
                }
                None => {
                    tracing::info!(code, "customer not found");
                    false
                }
            },
            Err(err) => {
                tracing::error!(code, error = %err, "customer lookup failed");
                false
            }
        }
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}
