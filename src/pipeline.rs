//! Engagement pipeline that orchestrates prompt composition → generation →
//! normalization → platform formatting.
//!
//! Three flows share the same backend:
//! - suggestions: two comments and one DM for a post, generated concurrently
//! - improve: rewrite a hand-written comment
//! - create post: write a new post about a topic
//!
//! Every flow reads a fresh override snapshot from settings, so tone edits made
//! between calls are picked up without rebuilding the pipeline. Failures are
//! logged with full detail and surfaced with a short user-facing message.

use crate::compose::{
    author_name_with_prefix, compose_improve_prompt, compose_post_prompt, compose_prompts,
    viewer_display_name, PromptInput,
};
use crate::llm::{create_llm_provider, generate, LlmError, LlmProvider, Purpose};
use crate::normalize::{clean_dm, clean_improved_text, parse_comments};
use crate::platform::Platform;
use crate::request_log::{RequestKind, RequestLog, RequestLogStore};
use crate::settings::{read_llm_config, SettingsStore};
use crate::tones::ToneOverrides;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Errors surfaced to the user by the pipeline.
///
/// `Display` is the user-facing message; the backend error behind a generic
/// message stays reachable through `source()`.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    Configuration(String),

    #[error("Failed to get suggestions. Check your key or try again.")]
    Suggestions(#[source] LlmError),

    #[error("Failed to improve comment. Please try again.")]
    Improve(#[source] LlmError),

    #[error("Failed to create post. Please try again.")]
    CreatePost(#[source] LlmError),

    #[error("{0}")]
    EmptyContent(&'static str),
}

/// Input for the suggestion flow
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// Post body, already truncated by the caller
    pub post_text: String,
    pub tone_id: String,
    pub platform: Platform,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub viewer_name: String,
}

/// Two formatted comments and one formatted DM
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub comments: [String; 2],
    pub dm_suggestion: String,
}

impl Suggestions {
    /// Whether both comment slots hold generated text.
    ///
    /// Short or unparseable output is padded with empty strings rather than
    /// treated as an error; strict callers check this.
    pub fn fully_populated(&self) -> bool {
        self.comments.iter().all(|c| !c.is_empty())
    }
}

/// Success payload of the suggestion flow
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub comments: [String; 2],
    pub dm_suggestion: String,
    pub success: bool,
}

impl From<Suggestions> for SuggestionsResponse {
    fn from(s: Suggestions) -> Self {
        Self {
            comments: s.comments,
            dm_suggestion: s.dm_suggestion,
            success: true,
        }
    }
}

/// Success payload of the improve flow
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveResponse {
    pub success: bool,
    pub improved_text: String,
}

/// Success payload of the post creation flow
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub success: bool,
    pub post_text: String,
}

/// Failure payload for any flow
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl From<&PipelineError> for ErrorResponse {
    fn from(e: &PipelineError) -> Self {
        Self {
            success: false,
            error: e.to_string(),
        }
    }
}

/// The engagement pipeline
pub struct EngagementPipeline {
    provider: Arc<dyn LlmProvider>,
    settings: Arc<dyn SettingsStore>,
    request_log: Option<RequestLogStore>,
}

impl EngagementPipeline {
    /// Create a pipeline over an existing provider
    pub fn new(provider: Arc<dyn LlmProvider>, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            provider,
            settings,
            request_log: None,
        }
    }

    /// Create a pipeline with the provider described by settings.
    ///
    /// Fails with a configuration error before any network call when the API
    /// key is missing or malformed.
    pub fn from_settings(settings: Arc<dyn SettingsStore>) -> Result<Self, PipelineError> {
        let config = read_llm_config(settings.as_ref());
        let provider = create_llm_provider(&config).map_err(|e| {
            log::warn!("Pipeline: configuration rejected: {}", e);
            PipelineError::Configuration(e.to_string())
        })?;
        log::info!(
            "Pipeline: using {} ({}) with {:?} timeout",
            provider.name(),
            provider.model(),
            config.timeout
        );
        Ok(Self::new(provider, settings))
    }

    /// Keep a log of every request in `store`
    pub fn with_request_log(mut self, store: RequestLogStore) -> Self {
        self.request_log = Some(store);
        self
    }

    /// Current tone customisations
    pub fn overrides(&self) -> ToneOverrides {
        ToneOverrides::from_store(self.settings.as_ref())
    }

    fn start_log(&self, kind: RequestKind, platform: Platform, tone_id: &str) -> RequestLog {
        RequestLog::new(
            kind,
            platform,
            tone_id,
            self.provider.name(),
            self.provider.model(),
        )
    }

    fn finish_log(&self, record: RequestLog) {
        if let Some(store) = &self.request_log {
            store.record(record);
        }
    }

    /// Log the backend failure and map it to its user-facing error
    fn fail(
        &self,
        mut record: RequestLog,
        error: LlmError,
        wrap: fn(LlmError) -> PipelineError,
    ) -> PipelineError {
        log::error!("Pipeline: {:?} request failed: {}", record.kind, error);
        record.complete_error(error.to_string());
        self.finish_log(record);

        if error.is_configuration() {
            PipelineError::Configuration(error.to_string())
        } else {
            wrap(error)
        }
    }

    /// Generate two comments and a DM for a post.
    ///
    /// Both generation calls run concurrently and both must succeed; the first
    /// failure aborts the whole request with no partial result.
    pub async fn generate_suggestions(
        &self,
        request: &SuggestionRequest,
    ) -> Result<Suggestions, PipelineError> {
        let platform = request.platform;
        let overrides = self.overrides();
        let prompts = compose_prompts(
            &PromptInput {
                post_text: &request.post_text,
                tone_id: &request.tone_id,
                platform,
                author_name: &request.author_name,
                viewer_name: &request.viewer_name,
            },
            &overrides,
        );

        let mut record = self.start_log(RequestKind::Suggestions, platform, &request.tone_id);
        record.prompt_chars =
            prompts.comments_prompt.chars().count() + prompts.dm_prompt.chars().count();
        record.info(format!("Requesting suggestions from {}", self.provider.name()));

        let started = Instant::now();
        let result = tokio::try_join!(
            generate(self.provider.as_ref(), Purpose::Engagement, &prompts.comments_prompt),
            generate(self.provider.as_ref(), Purpose::Engagement, &prompts.dm_prompt),
        );
        record.llm_duration_ms = Some(started.elapsed().as_millis() as u64);

        let (raw_comments, raw_dm) = match result {
            Ok(pair) => pair,
            Err(e) => return Err(self.fail(record, e, PipelineError::Suggestions)),
        };
        record.response_chars = raw_comments.chars().count() + raw_dm.chars().count();

        let author = author_name_with_prefix(&request.author_name);
        // Farcaster drops the signature instead of signing with a placeholder
        let signer = match platform {
            Platform::Farcaster => request.viewer_name.trim().to_string(),
            _ => viewer_display_name(&request.viewer_name),
        };

        let comments = parse_comments(&raw_comments)
            .map(|comment| platform.format_comment(&comment, &author));
        let dm_suggestion = platform.format_dm(&clean_dm(&raw_dm), &author, &signer);

        let suggestions = Suggestions {
            comments,
            dm_suggestion,
        };

        if suggestions.fully_populated() {
            record.info("Parsed 2 comments");
        } else {
            log::warn!("Pipeline: fewer than 2 usable comments parsed, padding with empty slots");
            record.warn_with_details("Padded comment slots", raw_comments);
        }
        record.complete_success();
        log::info!(
            "Pipeline: suggestions ready in {}ms",
            record.total_duration_ms.unwrap_or_default()
        );
        self.finish_log(record);

        Ok(suggestions)
    }

    /// Rewrite a hand-written comment in the given tone
    pub async fn improve_comment(
        &self,
        comment: &str,
        tone_id: &str,
        platform: Platform,
    ) -> Result<String, PipelineError> {
        if comment.trim().is_empty() {
            log::debug!("Pipeline: empty comment, nothing to improve");
            return Err(PipelineError::EmptyContent("No improvement generated"));
        }

        let prompt = compose_improve_prompt(comment, tone_id, platform);
        let mut record = self.start_log(RequestKind::Improve, platform, tone_id);
        record.prompt_chars = prompt.chars().count();

        let started = Instant::now();
        let result = generate(self.provider.as_ref(), Purpose::Improve, &prompt).await;
        record.llm_duration_ms = Some(started.elapsed().as_millis() as u64);

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => return Err(self.fail(record, e, PipelineError::Improve)),
        };
        record.response_chars = raw.chars().count();

        let improved = clean_improved_text(&raw);
        if improved.is_empty() {
            record.complete_error("Cleaned improvement was empty");
            self.finish_log(record);
            return Err(PipelineError::EmptyContent("No improvement generated"));
        }

        record.complete_success();
        self.finish_log(record);
        Ok(improved)
    }

    /// Write a new post about `topic` in one of the post-creation tones
    pub async fn create_post(
        &self,
        topic: &str,
        tone_id: &str,
        platform: Platform,
    ) -> Result<String, PipelineError> {
        if topic.trim().is_empty() {
            return Err(PipelineError::EmptyContent("No post generated"));
        }

        let prompt = compose_post_prompt(topic, tone_id, platform, &self.overrides());
        let mut record = self.start_log(RequestKind::CreatePost, platform, tone_id);
        record.prompt_chars = prompt.chars().count();

        let started = Instant::now();
        let result = generate(self.provider.as_ref(), Purpose::Engagement, &prompt).await;
        record.llm_duration_ms = Some(started.elapsed().as_millis() as u64);

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => return Err(self.fail(record, e, PipelineError::CreatePost)),
        };
        record.response_chars = raw.chars().count();

        let post = clean_improved_text(&raw);
        if post.is_empty() {
            record.complete_error("Cleaned post was empty");
            self.finish_log(record);
            return Err(PipelineError::EmptyContent("No post generated"));
        }

        record.complete_success();
        self.finish_log(record);
        Ok(post)
    }
}
