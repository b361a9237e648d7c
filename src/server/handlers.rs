use super::types::{GenerateOutcome, GenerateRequest};
use crate::{llm::LlmClient, prompt::compose_prompt};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode},
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> GenerateOutcome {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            debug!("Rejected oversized body: {}", rejection.body_text());
            return GenerateOutcome::PayloadTooLarge;
        }
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection.body_text());
            return GenerateOutcome::PromptMissing;
        }
    };

    let Some(prompt) = request.prompt.filter(|prompt| !prompt.is_empty()) else {
        debug!("Request has no prompt");
        return GenerateOutcome::PromptMissing;
    };

    let full_prompt = compose_prompt(&prompt);

    match state.llm.generate_text(&full_prompt).await {
        Ok(text) => {
            info!(output_len = text.len(), "Generated clinical note");
            GenerateOutcome::Succeeded(text)
        }
        Err(e) => {
            error!(error = %e, "AI call failed");
            GenerateOutcome::Failed
        }
    }
}

pub async fn method_not_allowed(method: Method) -> GenerateOutcome {
    debug!(%method, "Rejected non-POST request");
    GenerateOutcome::MethodRejected
}
