//! API Routes
//!
//! - `/api/upload` - Document upload and text extraction
//! - `/api/summary`, `/api/mcqs`, `/api/flashcards` - Study material generation
//! - `/api/health` - Health checks

pub mod health;
pub mod study;
pub mod upload;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::apply_cors;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let api_router = Router::new()
        .merge(upload::router(state.clone()))
        .merge(study::router(state.clone()))
        .merge(health::router(state))
        .layer(TraceLayer::new_for_http());

    apply_cors(api_router)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::response::Response;

    use crate::config::{Config, LLMConfig, ServerConfig};
    use crate::llm::LLMAdapter;
    use crate::models::AppState;
    use crate::store::DocumentStore;
    use crate::types::{AppError, AppResult, LLMRequest, LLMResponse};

    /// Adapter that records requests and replies with a fixed text or error.
    pub struct FakeLLM {
        pub requests: Mutex<Vec<LLMRequest>>,
        reply: Result<String, String>,
    }

    impl FakeLLM {
        pub fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                reply: Ok(text.to_string()),
            })
        }

        pub fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                reply: Err(message.to_string()),
            })
        }

        pub fn calls(&self) -> Vec<LLMRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LLMAdapter for FakeLLM {
        async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(LLMResponse {
                    content: text.clone(),
                    finish_reason: Some("stop".to_string()),
                    usage: None,
                }),
                Err(msg) => Err(AppError::LLMApi(msg.clone())),
            }
        }
    }

    pub fn test_state(llm: Arc<FakeLLM>) -> AppState {
        AppState {
            config: Config {
                server: ServerConfig {
                    port: 0,
                    host: "127.0.0.1".to_string(),
                },
                llm: LLMConfig {
                    openai_api_key: "sk-test".to_string(),
                    openai_base_url: "http://127.0.0.1:9".to_string(),
                },
            },
            store: DocumentStore::new(),
            llm,
        }
    }

    pub fn multipart_upload(filename: &str, bytes: &[u8]) -> Request<Body> {
        let boundary = "studypal-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header("content-type", format!("multipart/form-data; boundary={boundary}"))
            .body(Body::from(body))
            .unwrap()
    }

    pub async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
