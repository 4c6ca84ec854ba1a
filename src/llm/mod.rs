//! Text-generation backend.
//!
//! Every call is a single turn: one fixed system instruction chosen by the
//! call's purpose, one user prompt, fixed temperature. No retries are made
//! here; a failed call is reported and the caller decides whether to re-run.

pub mod openai;

pub use openai::{OpenAiLlmProvider, DEFAULT_MODEL, OPENAI_API_URL};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout for generation calls
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(30);

/// Sampling temperature used for every generation request
pub const GENERATION_TEMPERATURE: f64 = 0.7;

/// Prefix every valid OpenAI secret key starts with
pub const API_KEY_PREFIX: &str = "sk-";

const SOCIAL_MEDIA_SYSTEM_PROMPT: &str =
    "You are a social media assistant that writes natural, human-sounding comments and messages.";

const WRITING_ASSISTANT_SYSTEM_PROMPT: &str =
    "You are a helpful writing assistant that improves comments while keeping the author's voice.";

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("No API key configured for {0}")]
    NoApiKey(String),

    #[error("Invalid API key: expected a key starting with \"sk-\"")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Whether the error stems from missing or malformed credentials
    pub fn is_configuration(&self) -> bool {
        matches!(self, LlmError::NoApiKey(_) | LlmError::InvalidApiKey)
    }
}

/// Why a generation call is made; selects the fixed system instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    /// Comments, DMs and new posts
    Engagement,
    /// Rewriting a user's own comment
    Improve,
}

impl Purpose {
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Purpose::Engagement => SOCIAL_MEDIA_SYSTEM_PROMPT,
            Purpose::Improve => WRITING_ASSISTANT_SYSTEM_PROMPT,
        }
    }
}

/// A backend that turns a prompt into free-form text
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run a single-turn completion and return the raw generated text
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError>;

    fn name(&self) -> &'static str;

    fn model(&self) -> &str;
}

/// Issue one generation call for `purpose`
pub async fn generate(
    provider: &dyn LlmProvider,
    purpose: Purpose,
    prompt: &str,
) -> Result<String, LlmError> {
    log::debug!(
        "LLM: {:?} request to {} ({}), {} chars",
        purpose,
        provider.name(),
        provider.model(),
        prompt.len()
    );
    let text = provider.complete(purpose.system_prompt(), prompt).await?;
    log::debug!("LLM: {:?} response, {} chars", purpose, text.len());
    Ok(text)
}

/// Generation backend configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_url: OPENAI_API_URL.to_string(),
            timeout: DEFAULT_LLM_TIMEOUT,
        }
    }
}

/// Check an API key before any network call is attempted
pub fn validate_api_key(api_key: &str) -> Result<(), LlmError> {
    let key = api_key.trim();
    if key.is_empty() {
        return Err(LlmError::NoApiKey("openai".to_string()));
    }
    if !key.starts_with(API_KEY_PREFIX) {
        return Err(LlmError::InvalidApiKey);
    }
    Ok(())
}

/// Create the generation provider described by `config`
pub fn create_llm_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    validate_api_key(&config.api_key)?;
    let provider = OpenAiLlmProvider::with_model(config.api_key.clone(), config.model.clone())
        .with_url(config.api_url.clone())
        .with_timeout(config.timeout);
    Ok(Arc::new(provider))
}
