use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory document store shared by all handlers.
///
/// Ids are `doc_<n>` with `n` counting documents created so far, starting at 1.
/// Entries are never updated or removed and live as long as the process.
#[derive(Clone, Default)]
pub struct DocumentStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    documents: HashMap<String, String>,
    count: u64,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` and return its new id.
    pub async fn put(&self, text: String) -> String {
        // Count, insert and increment under one write guard.
        let mut guard = self.inner.write().await;
        let doc_id = format!("doc_{}", guard.count + 1);
        guard.documents.insert(doc_id.clone(), text);
        guard.count += 1;
        doc_id
    }

    pub async fn get(&self, doc_id: &str) -> Option<String> {
        let guard = self.inner.read().await;
        guard.documents.get(doc_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
