//! Chat endpoint: question answering over the accumulated context

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generation::PromptBuilder;
use crate::server::state::AppState;

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /api/chat - answer a question against the full accumulated
/// context
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    tracing::info!("Question: \"{}\"", request.question);

    let context = state.store().read_all().await?;
    let prompt = PromptBuilder::build(&context, &request.question);

    let answer = state.completion().complete(&prompt).await?;

    tracing::info!(
        "Answered with {} ({} chars)",
        state.completion().model(),
        answer.len()
    );

    Ok(Json(ChatResponse { answer }))
}
