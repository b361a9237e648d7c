use super::gemini::GeminiClient;
use crate::{
    Error, Result,
    config::{LlmConfig, LlmProvider},
};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// A text generation backend: one prompt in, generated text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

/// Builds the backend selected by `config.provider`.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
    info!(
        provider = config.provider.as_str(),
        model = %config.model,
        "Initializing LLM client"
    );

    let client: Arc<dyn LlmClient> = match config.provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(config.clone())?),
        LlmProvider::Openai => Arc::new(OpenAiClient::new(config.clone())),
    };

    Ok(client)
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new();

        if let Some(api_key) = config.api_key {
            openai_config = openai_config.with_api_key(api_key);
        }

        if let Some(base_url) = config.base_url.filter(|url| !url.is_empty()) {
            openai_config = openai_config.with_api_base(base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Creating chat completion"
        );

        let message = openai_types::ChatCompletionRequestUserMessageArgs::default()
            .content(openai_types::ChatCompletionRequestUserMessageContent::Text(
                prompt.to_string(),
            ))
            .build()?;
        let messages: Vec<openai_types::ChatCompletionRequestMessage> = vec![message.into()];

        let request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| Error::llm("Chat completion returned no choices"))
    }
}
