use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const PROMPT_REQUIRED: &str = "Prompt is required";
pub const PAYLOAD_TOO_LARGE: &str = "Payload Too Large";
pub const GENERATION_FAILED: &str = "AI generation failed";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Terminal state of one generator request.
///
/// Every variant renders either a `{"text": ..}` or an `{"error": ..}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    MethodRejected,
    PromptMissing,
    PayloadTooLarge,
    Succeeded(String),
    Failed,
}

impl GenerateOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodRejected => StatusCode::METHOD_NOT_ALLOWED,
            Self::PromptMissing => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Succeeded(_) => StatusCode::OK,
            Self::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GenerateOutcome {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = |message: &str| {
            (
                status,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
                .into_response()
        };

        match self {
            Self::Succeeded(text) => (status, Json(GenerateResponse { text })).into_response(),
            Self::MethodRejected => {
                let mut response = error(METHOD_NOT_ALLOWED);
                response
                    .headers_mut()
                    .insert(header::ALLOW, header::HeaderValue::from_static("POST"));
                response
            }
            Self::PromptMissing => error(PROMPT_REQUIRED),
            Self::PayloadTooLarge => error(PAYLOAD_TOO_LARGE),
            Self::Failed => error(GENERATION_FAILED),
        }
    }
}
