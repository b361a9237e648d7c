//! Gemini text generation over the REST `generateContent` endpoint.

use super::{
    LlmClient,
    types::{GenerateContentRequest, GenerateContentResponse},
};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.gemini_base_url().trim_end_matches('/').to_string(),
            model: config.model,
            api_key: config.api_key.filter(|key| !key.is_empty()),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| Error::MissingApiKey {
            provider: "gemini".to_string(),
        })?;

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!(%status, "Failed to read Gemini error body: {}", e.without_url());
                String::new()
            });
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(network_error)?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                "Gemini usage"
            );
        }

        parsed.text()
    }
}

/// Drops the request URL so transport failures never echo endpoint details into logs.
fn network_error(e: reqwest::Error) -> Error {
    Error::Network(e.without_url())
}
