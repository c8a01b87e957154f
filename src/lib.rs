pub mod adapters;
pub mod domain;
pub mod store;
pub mod ui;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn store::RecordStore>,
}
