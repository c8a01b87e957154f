//! Client-side table state: a snapshot of one book plus sort and filter
//! settings. Sorting and filtering never touch the server; only `load` does.

use {
    super::client::EntryApi,
    crate::domain::{book::Book, entry::Entry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The column being sorted. Every Entry field is sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Code,
    Name,
    CompanyName,
    Email,
    Phone,
    Address,
}

impl SortKey {
    fn value<'a>(&self, entry: &'a Entry) -> &'a str {
        match self {
            Self::Code => entry.code.as_str(),
            Self::Name => &entry.fields.name,
            Self::CompanyName => &entry.fields.companyname,
            Self::Email => &entry.fields.email,
            Self::Phone => &entry.fields.phone,
            Self::Address => &entry.fields.address,
        }
    }
}

pub struct Presenter {
    book: Book,
    entries: Vec<Entry>,
    sort_key: SortKey,
    direction: SortDirection,
    filter: String,
}

impl Presenter {
    pub fn new(book: Book) -> Self {
        Self {
            book,
            entries: Vec::new(),
            sort_key: SortKey::Name,
            direction: SortDirection::Ascending,
            filter: String::new(),
        }
    }

    pub fn book(&self) -> Book {
        self.book
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Replace the snapshot with a fresh List. Fail-soft: a load error is
    /// logged and the table goes empty until the next reload.
    pub async fn load(&mut self, api: &dyn EntryApi) {
        match api.list(self.book).await {
            Ok(entries) => self.entries = entries,
            Err(err) => {
                tracing::error!(book = %self.book, error = %err, "failed to load entries");
                self.entries.clear();
            }
        }
    }

    /// Replace the snapshot directly (a load that already happened).
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    /// Column-header click: same key toggles direction, a new key starts
    /// ascending.
    pub fn request_sort(&mut self, key: SortKey) {
        self.direction = if self.sort_key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort_key = key;
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// The rows as the table shows them: stable-sorted by the active key,
    /// then filtered on `name`/`UUID` by case-insensitive substring. Ties
    /// keep their snapshot order in both directions.
    pub fn view(&self) -> Vec<&Entry> {
        let mut rows: Vec<&Entry> = self.entries.iter().collect();
        rows.sort_by(|a, b| {
            let ord = self.sort_key.value(a).cmp(self.sort_key.value(b));
            match self.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });

        let needle = self.filter.to_lowercase();
        if needle.is_empty() {
            return rows;
        }
        rows.into_iter()
            .filter(|entry| {
                entry.fields.name.to_lowercase().contains(&needle)
                    || entry.code.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }
}
