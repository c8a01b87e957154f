//! Record-store client for the hosted records API.
//!
//! Talks to a PocketBase-style backend: one `records` endpoint per
//! collection, JSON in and out, string ids assigned server-side.

use {
    super::{NewRecord, RecordStore},
    crate::domain::{
        book::Book,
        code::EntryCode,
        entry::{Entry, EntryFields},
        error::StoreError,
    },
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
    std::time::Duration,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// The UI loads whole collections at once; fetched in batches of this size.
const LIST_PAGE_SIZE: u32 = 500;

pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct NewRecordBody<'a> {
    #[serde(rename = "UUID")]
    code: &'a EntryCode,
    #[serde(flatten)]
    fields: &'a EntryFields,
}

#[derive(Deserialize)]
struct RecordPage {
    items: Vec<Entry>,
    #[serde(rename = "totalPages", default)]
    total_pages: u32,
}

impl RemoteStore {
    /// Build a client for the record store at `base_url` (e.g.
    /// `http://127.0.0.1:8090`). Timeouts apply to every call so a dead
    /// backend surfaces as an error instead of a hang.
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn records_url(&self, book: Book) -> String {
        format!("{}/api/collections/{}/records", self.base_url, book.as_str())
    }

    /// Map the backend status: 404 means the id has no record, anything else
    /// non-2xx is a generic backend fault carrying the body for the log.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Backend(format!("{status}: {body}")));
        }
        Ok(response)
    }
}

#[async_trait]
impl RecordStore for RemoteStore {
    async fn create(&self, book: Book, record: &NewRecord) -> Result<Entry, StoreError> {
        let body = NewRecordBody {
            code: &record.code,
            fields: &record.fields,
        };
        let response = self
            .client
            .post(self.records_url(book))
            .json(&body)
            .send()
            .await?;
        let entry = Self::ensure_success(response).await?.json().await?;
        Ok(entry)
    }

    async fn list(&self, book: Book) -> Result<Vec<Entry>, StoreError> {
        // The backend pages its record list; walk every page so a large
        // collection comes back whole.
        let mut entries = Vec::new();
        let mut page = 1u32;
        loop {
            let response = self
                .client
                .get(self.records_url(book))
                .query(&[
                    ("page", page.to_string()),
                    ("perPage", LIST_PAGE_SIZE.to_string()),
                    ("sort", "-created".to_string()),
                ])
                .send()
                .await?;
            let batch: RecordPage = Self::ensure_success(response).await?.json().await?;
            let fetched = batch.items.len();
            entries.extend(batch.items);
            // The empty-batch check stops a backend that misreports its
            // page count from looping us forever.
            if fetched == 0 || page >= batch.total_pages.max(1) {
                break;
            }
            page += 1;
        }
        Ok(entries)
    }

    async fn find_by_code(&self, book: Book, code: &str) -> Result<Option<Entry>, StoreError> {
        // The code lands inside a quoted filter literal; escape it so a
        // stray quote can't break out of the expression.
        let escaped = code.replace('\\', "\\\\").replace('"', "\\\"");
        let response = self
            .client
            .get(self.records_url(book))
            .query(&[("perPage", "1"), ("filter", &format!("UUID=\"{escaped}\""))])
            .send()
            .await?;
        let page: RecordPage = Self::ensure_success(response).await?.json().await?;
        Ok(page.items.into_iter().next())
    }

    async fn update(
        &self,
        book: Book,
        id: &str,
        fields: &EntryFields,
    ) -> Result<Entry, StoreError> {
        let response = self
            .client
            .patch(format!("{}/{id}", self.records_url(book)))
            .json(fields)
            .send()
            .await?;
        let entry = Self::ensure_success(response).await?.json().await?;
        Ok(entry)
    }

    async fn delete(&self, book: Book, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(format!("{}/{id}", self.records_url(book)))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
