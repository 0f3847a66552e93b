use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::llm;
use crate::models::{AppState, DocQuery};
use crate::prompt::TaskKind;
use crate::types::AppResult;

pub const DOCUMENT_NOT_FOUND: &str = "Document not found";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/summary", get(get_summary))
        .route("/api/mcqs", get(get_mcqs))
        .route("/api/flashcards", get(get_flashcards))
        .with_state(state)
}

async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<DocQuery>,
) -> AppResult<Json<Value>> {
    run_study_task(&state, TaskKind::Summary, &query.doc_id).await
}

async fn get_mcqs(
    State(state): State<AppState>,
    Query(query): Query<DocQuery>,
) -> AppResult<Json<Value>> {
    run_study_task(&state, TaskKind::Mcqs, &query.doc_id).await
}

async fn get_flashcards(
    State(state): State<AppState>,
    Query(query): Query<DocQuery>,
) -> AppResult<Json<Value>> {
    run_study_task(&state, TaskKind::Flashcards, &query.doc_id).await
}

/// Look up the document and return the model's raw output under the task's field.
///
/// Unknown and empty documents answer 200 with `{"error": "Document not found"}`
/// and never reach the model.
async fn run_study_task(state: &AppState, kind: TaskKind, doc_id: &str) -> AppResult<Json<Value>> {
    let text = match state.store.get(doc_id).await {
        Some(text) if !text.is_empty() => text,
        _ => {
            warn!(doc_id = %doc_id, task = %kind, "Document not found");
            return Ok(Json(json!({ "error": DOCUMENT_NOT_FOUND })));
        }
    };

    let raw = llm::run_task(state.llm.as_ref(), kind, &text).await?;

    let mut body = Map::new();
    body.insert(kind.response_field().to_string(), Value::String(raw));
    Ok(Json(Value::Object(body)))
}
