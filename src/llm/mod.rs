pub mod client;
pub mod gemini;
pub mod types;

pub use client::{LlmClient, OpenAiClient, create_client};
pub use gemini::GeminiClient;
