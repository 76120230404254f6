use std::sync::Arc;

use crate::llm_client::CompletionProvider;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing in the crate is initialized at import time.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL-backed when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn DocumentStore>,
    /// The one AI provider client both generators share.
    pub llm: Arc<dyn CompletionProvider>,
}
