//! Typed client for the crate's own HTTP surface.
//!
//! The presenter and dialog talk to the CRUD handlers through [`EntryApi`]
//! instead of a concrete client, so tests substitute a fake.

use {
    crate::{
        adapters::api::{CreatedResponse, DeletePayload, ListResponse, UpdatePayload},
        domain::{
            book::Book,
            entry::{Entry, EntryFields},
        },
    },
    async_trait::async_trait,
    std::time::Duration,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// The five operations the UI layer performs against a book.
#[async_trait]
pub trait EntryApi: Send + Sync {
    async fn create(&self, book: Book, fields: &EntryFields)
    -> Result<CreatedResponse, ClientError>;
    async fn list(&self, book: Book) -> Result<Vec<Entry>, ClientError>;
    async fn search(&self, book: Book, code: &str) -> Result<Vec<Entry>, ClientError>;
    async fn update(&self, book: Book, id: &str, fields: &EntryFields)
    -> Result<(), ClientError>;
    async fn delete(&self, book: Book, id: &str) -> Result<(), ClientError>;
}

/// reqwest-backed [`EntryApi`] against a running bizbook server.
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, book: Book, operation: &str) -> String {
        format!("{}/api/{}/{operation}", self.base_url, book.as_str())
    }

    /// Non-2xx responses carry `{error}` bodies; fall back to the raw text
    /// when the body isn't ours.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl EntryApi for RestClient {
    async fn create(
        &self,
        book: Book,
        fields: &EntryFields,
    ) -> Result<CreatedResponse, ClientError> {
        let response = self
            .client
            .post(self.endpoint(book, "create"))
            .json(fields)
            .send()
            .await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn list(&self, book: Book) -> Result<Vec<Entry>, ClientError> {
        let response = self.client.get(self.endpoint(book, "read")).send().await?;
        let list: ListResponse = Self::ensure_success(response).await?.json().await?;
        Ok(list.data)
    }

    async fn search(&self, book: Book, code: &str) -> Result<Vec<Entry>, ClientError> {
        let response = self
            .client
            .get(self.endpoint(book, "search"))
            .query(&[("UUID", code)])
            .send()
            .await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn update(
        &self,
        book: Book,
        id: &str,
        fields: &EntryFields,
    ) -> Result<(), ClientError> {
        let payload = UpdatePayload {
            id: Some(id.to_string()),
            code: None,
            fields: fields.clone(),
        };
        let response = self
            .client
            .put(self.endpoint(book, "update"))
            .json(&payload)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, book: Book, id: &str) -> Result<(), ClientError> {
        let payload = DeletePayload {
            id: Some(id.to_string()),
        };
        let response = self
            .client
            .delete(self.endpoint(book, "delete"))
            .json(&payload)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
