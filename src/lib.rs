//! Social media engagement assistant.
//!
//! Turns a post's text into two short comments and a DM draft in a chosen
//! tone, rewrites hand-written comments, and drafts new posts, for LinkedIn,
//! X and Farcaster.

pub mod compose;
pub mod llm;
pub mod normalize;
pub mod pipeline;
pub mod platform;
pub mod request_log;
pub mod settings;
pub mod tones;

#[cfg(test)]
mod tests;

pub use pipeline::{EngagementPipeline, PipelineError, SuggestionRequest, Suggestions};
pub use platform::Platform;
