//! Wire types for the Gemini `generateContent` endpoint.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Finish reasons that mean the candidate text must not be used.
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "LANGUAGE"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
    pub total_token_count: Option<u32>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate.
    ///
    /// A blocked candidate or a blocked prompt is an error. A response with
    /// neither candidates nor feedback yields an empty string.
    pub fn text(&self) -> Result<String> {
        if let Some(candidate) = self.candidates.first() {
            if let Some(reason) = candidate
                .finish_reason
                .as_deref()
                .filter(|r| BLOCKING_FINISH_REASONS.contains(r))
            {
                return Err(Error::blocked(format!("candidate finished with {}", reason)));
            }

            let text = candidate
                .content
                .as_ref()
                .map(|content| {
                    content
                        .parts
                        .iter()
                        .filter_map(|part| part.text.as_deref())
                        .collect::<String>()
                })
                .unwrap_or_default();
            return Ok(text);
        }

        if let Some(feedback) = &self.prompt_feedback {
            let reason = feedback
                .block_reason
                .clone()
                .unwrap_or_else(|| "unspecified".to_string());
            return Err(Error::blocked(format!("prompt blocked: {}", reason)));
        }

        Ok(String::new())
    }
}
