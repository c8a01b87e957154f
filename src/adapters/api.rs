//! CRUD handlers for the two books.
//!
//! One handler set parameterized by the `{book}` path segment; the wire
//! contract (paths, bodies, status codes, messages) is fixed, so request and
//! response shapes are explicit structs shared with the REST client.

use {
    super::api_errors::ApiError,
    crate::{
        AppState,
        domain::{
            book::Book,
            code::EntryCode,
            entry::{Entry, EntryFields},
            error::StoreError,
        },
        store::NewRecord,
    },
    axum::{
        Json, Router,
        extract::{Path, Query, State},
        routing::{delete, get, post, put},
    },
    serde::{Deserialize, Serialize},
    std::time::Duration,
    tower_http::{timeout::TimeoutLayer, trace::TraceLayer},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
    #[serde(rename = "UUID")]
    pub code: EntryCode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "UUID")]
    pub code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub id: Option<String>,
    // Accepted for wire compatibility, never applied: codes are set once at
    // creation.
    #[serde(rename = "UUID", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub fields: EntryFields,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletePayload {
    pub id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// The full HTTP surface. Disallowed methods get axum's default 405 with an
/// `Allow` header; an unknown `{book}` segment is rejected as a bad path.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/api/{book}/create", post(create_entry))
        .route("/api/{book}/read", get(read_entries))
        .route("/api/{book}/search", get(search_entries))
        .route("/api/{book}/update", put(update_entry))
        .route("/api/{book}/delete", delete(delete_entry))
        .layer(TimeoutLayer::new(Duration::from_secs(15)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /api/{book}/create — generate a code, persist, return `{id, UUID}`.
async fn create_entry(
    State(state): State<AppState>,
    Path(book): Path<Book>,
    Json(fields): Json<EntryFields>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let record = NewRecord {
        code: EntryCode::generate(),
        fields,
    };
    let entry = state
        .store
        .create(book, &record)
        .await
        .map_err(|err| ApiError::with_backend_message(err, "Failed to create entry"))?;

    tracing::info!(book = %book, id = %entry.id, code = %entry.code, "entry created");
    Ok(Json(CreatedResponse {
        id: entry.id,
        code: entry.code,
    }))
}

/// GET /api/{book}/read — the whole collection, newest first.
async fn read_entries(
    State(state): State<AppState>,
    Path(book): Path<Book>,
) -> Result<Json<ListResponse>, ApiError> {
    let data = state.store.list(book).await?;
    tracing::debug!(book = %book, count = data.len(), "listed entries");
    Ok(Json(ListResponse { data }))
}

/// GET /api/{book}/search?UUID= — zero-or-one matches, always as an array.
async fn search_entries(
    State(state): State<AppState>,
    Path(book): Path<Book>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| StoreError::Validation("UUID is required".into()))?;

    let hit = state.store.find_by_code(book, &code).await?;
    Ok(Json(hit.into_iter().collect()))
}

/// PUT /api/{book}/update — replace all mutable fields of the record at `id`.
async fn update_entry(
    State(state): State<AppState>,
    Path(book): Path<Book>,
    Json(payload): Json<UpdatePayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = payload
        .id
        .filter(|i| !i.is_empty())
        .ok_or_else(|| StoreError::Validation("ID is required".into()))?;

    state.store.update(book, &id, &payload.fields).await?;
    tracing::info!(book = %book, id = %id, "entry updated");
    Ok(Json(MessageResponse {
        message: "Updated successfully".to_string(),
    }))
}

/// DELETE /api/{book}/delete — hard delete, no tombstone.
async fn delete_entry(
    State(state): State<AppState>,
    Path(book): Path<Book>,
    Json(payload): Json<DeletePayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = payload
        .id
        .filter(|i| !i.is_empty())
        .ok_or_else(|| StoreError::Validation("ID is required".into()))?;

    state.store.delete(book, &id).await?;
    tracing::info!(book = %book, id = %id, "entry deleted");
    Ok(Json(MessageResponse {
        message: "Deleted successfully".to_string(),
    }))
}
