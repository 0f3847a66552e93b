use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use tracing::info;

use crate::extract::extract_text;
use crate::models::{AppState, UploadResponse};
use crate::types::{AppError, AppResult};

/// Characters of extracted text echoed back to the uploader.
pub const PREVIEW_CHARS: usize = 500;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/upload", post(upload_file))
        // Uploads are held fully in memory with no size cap.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let (filename, bytes) = read_file_field(&mut multipart).await?;
    info!(filename = %filename, bytes = bytes.len(), "File upload request received");

    let text = tokio::task::spawn_blocking(move || extract_text(&bytes, &filename))
        .await
        .map_err(|e| AppError::Internal(format!("Extraction task failed: {}", e)))??;

    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    let chars = text.chars().count();
    let doc_id = state.store.put(text).await;
    info!(doc_id = %doc_id, chars, "Document stored");

    Ok(Json(UploadResponse { doc_id, preview }))
}

/// Pull the uploaded file out of the form.
///
/// Takes the first field named `file` or carrying a filename. A missing
/// filename is an empty hint, which extracts as plain text.
async fn read_file_field(multipart: &mut Multipart) -> AppResult<(String, Bytes)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Multipart error: {}", e)))?
    {
        if field.file_name().is_none() && field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("Failed to read file: {}", e)))?;
        return Ok((filename, bytes));
    }

    Err(AppError::InvalidRequest("No file provided".to_string()))
}

#[cfg(test)]
mod tests {
    use crate::extract::tests::build_pdf;
    use crate::routes::create_router;
    use crate::routes::testing::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_text_upload_stores_exact_text() {
        let state = test_state(FakeLLM::replying("unused"));
        let app = create_router(state.clone());
        let notes = "  Line one\nLine two  \n";

        let response = app.oneshot(multipart_upload("notes.md", notes.as_bytes())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["doc_id"], "doc_1");
        assert_eq!(body["preview"], notes);
        assert_eq!(state.store.get("doc_1").await.as_deref(), Some(notes));
    }

    #[tokio::test]
    async fn test_preview_is_first_500_chars() {
        let state = test_state(FakeLLM::replying("unused"));
        let app = create_router(state.clone());
        let notes = "ß".repeat(700);

        let response = app.oneshot(multipart_upload("long.txt", notes.as_bytes())).await.unwrap();
        let body = json_body(response).await;
        let preview = body["preview"].as_str().unwrap();
        assert_eq!(preview.chars().count(), 500);
        assert!(notes.starts_with(preview));
        assert_eq!(state.store.get("doc_1").await.unwrap().chars().count(), 700);
    }

    #[tokio::test]
    async fn test_sequential_uploads_get_increasing_ids() {
        let app = create_router(test_state(FakeLLM::replying("unused")));

        for expected in ["doc_1", "doc_2", "doc_3"] {
            let response = app
                .clone()
                .oneshot(multipart_upload("a.txt", b"some notes"))
                .await
                .unwrap();
            assert_eq!(json_body(response).await["doc_id"], expected);
        }
    }

    #[tokio::test]
    async fn test_pdf_upload_extracts_pages() {
        let state = test_state(FakeLLM::replying("unused"));
        let app = create_router(state.clone());
        let pdf = build_pdf(&["Newton first law", "Newton second law"]);

        let response = app.oneshot(multipart_upload("physics.PDF", &pdf)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let stored = state.store.get("doc_1").await.unwrap();
        let first = stored.find("Newton first law").unwrap();
        let second = stored.find("Newton second law").unwrap();
        assert!(first < second);
        assert_eq!(stored, stored.trim());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_415_and_nothing_stored() {
        let state = test_state(FakeLLM::replying("unused"));
        let app = create_router(state.clone());

        let response = app
            .oneshot(multipart_upload("notes.txt", &[0xc3, 0x28, 0xff]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("unsupported encoding"));
        assert!(state.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_422() {
        let app = create_router(test_state(FakeLLM::replying("unused")));

        let response = app
            .oneshot(multipart_upload("broken.pdf", b"not a pdf at all"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("corrupt PDF"));
    }

    #[tokio::test]
    async fn test_missing_file_field_is_400() {
        let app = create_router(test_state(FakeLLM::replying("unused")));
        let boundary = "b";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nhello\r\n--{boundary}--\r\n"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload")
                    .header("content-type", format!("multipart/form-data; boundary={boundary}"))
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_large_upload_is_accepted() {
        let state = test_state(FakeLLM::replying("unused"));
        let app = create_router(state.clone());
        // Above axum's default 2 MB body limit.
        let notes = "a".repeat(3 * 1024 * 1024);

        let response = app.oneshot(multipart_upload("big.txt", notes.as_bytes())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.store.get("doc_1").await.unwrap().len(), notes.len());
    }
}
