use async_trait::async_trait;
use soap_note_api::{Error, Result, llm::LlmClient};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub text: String,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            text: "ok".to_string(),
            error: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        Ok(self.text.clone())
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
