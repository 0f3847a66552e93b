use std::sync::Arc;

use crate::config::Config;
use crate::llm::LLMAdapter;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: DocumentStore,
    pub llm: Arc<dyn LLMAdapter>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UploadResponse {
    pub doc_id: String,
    pub preview: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DocQuery {
    pub doc_id: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub documents: usize,
}
