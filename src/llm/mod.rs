// LLM gateway: one chat-completion call per study task

pub mod provider;
pub mod openai;

pub use provider::*;

use crate::prompt::{build_prompt, TaskKind};
use crate::types::{AppResult, LLMMessage, LLMRequest};
use tracing::{error, info};

/// Model used for every task.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Send `prompt` as a single user message and return the raw reply text.
pub async fn complete(
    adapter: &dyn LLMAdapter,
    prompt: String,
    temperature: f32,
    max_tokens: u32,
) -> AppResult<String> {
    let request = LLMRequest {
        model: DEFAULT_MODEL.to_string(),
        messages: vec![LLMMessage::user(prompt)],
        max_tokens: Some(max_tokens),
        temperature: Some(temperature),
    };

    let response = adapter.create_chat_completion(&request).await.map_err(|e| {
        error!("Chat completion failed: {}", e);
        e
    })?;

    Ok(response.content)
}

/// Build the prompt for `kind` from the document text and run it.
pub async fn run_task(adapter: &dyn LLMAdapter, kind: TaskKind, text: &str) -> AppResult<String> {
    let prompt = build_prompt(kind, text);
    info!(
        task = %kind,
        model = DEFAULT_MODEL,
        prompt_chars = prompt.chars().count(),
        "Requesting completion"
    );

    complete(adapter, prompt, kind.temperature(), kind.max_tokens()).await
}
