//! Request logging for debugging and troubleshooting.
//!
//! Captures one log per engagement request including:
//! - Request metadata (kind, platform, tone, provider, model)
//! - Prompt and response sizes
//! - Timing information
//! - Errors if any
//!
//! Logs are write-only from the pipeline's side; nothing here feeds back into
//! generation.

use crate::platform::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Maximum number of request logs to keep in memory
const MAX_LOGS: usize = 100;

/// A single log entry within a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub details: Option<String>,
}

/// Log level for entries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Which pipeline operation produced the log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Suggestions,
    Improve,
    CreatePost,
}

/// A complete request log containing all entries for a single pipeline request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestLog {
    /// Unique ID for this request
    pub id: String,
    pub kind: RequestKind,
    /// When the request started
    pub started_at: DateTime<Utc>,
    /// When the request completed (if finished)
    #[serde(rename = "ended_at")]
    pub completed_at: Option<DateTime<Utc>>,
    pub platform: Platform,
    pub tone: String,
    /// Generation provider used
    pub llm_provider: String,
    /// Generation model used
    pub llm_model: String,
    /// Total characters sent across all prompts
    pub prompt_chars: usize,
    /// Total characters received across all responses
    pub response_chars: usize,
    /// Final result (success or error)
    pub status: RequestStatus,
    /// Technical error detail if status is Error
    pub error_message: Option<String>,
    /// All log entries for this request
    pub entries: Vec<LogEntry>,
    /// Total duration in milliseconds
    pub total_duration_ms: Option<u64>,
    /// Time spent waiting on the backend in milliseconds
    pub llm_duration_ms: Option<u64>,
}

/// Status of a request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    InProgress,
    Success,
    Error,
}

impl RequestLog {
    /// Create a new request log
    pub fn new(
        kind: RequestKind,
        platform: Platform,
        tone: impl Into<String>,
        llm_provider: impl Into<String>,
        llm_model: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            started_at: Utc::now(),
            completed_at: None,
            platform,
            tone: tone.into(),
            llm_provider: llm_provider.into(),
            llm_model: llm_model.into(),
            prompt_chars: 0,
            response_chars: 0,
            status: RequestStatus::InProgress,
            error_message: None,
            entries: Vec::new(),
            total_duration_ms: None,
            llm_duration_ms: None,
        }
    }

    /// Add a log entry
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>, details: Option<String>) {
        self.entries.push(LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            details,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message, None);
    }

    /// Warn with the raw text that triggered it
    pub fn warn_with_details(&mut self, message: impl Into<String>, details: impl Into<String>) {
        self.log(LogLevel::Warn, message, Some(details.into()));
    }

    /// Mark request as complete with success
    pub fn complete_success(&mut self) {
        self.finish(RequestStatus::Success);
    }

    /// Mark request as complete with error
    pub fn complete_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        self.log(LogLevel::Error, error.clone(), None);
        self.error_message = Some(error);
        self.finish(RequestStatus::Error);
    }

    fn finish(&mut self, status: RequestStatus) {
        let now = Utc::now();
        self.completed_at = Some(now);
        self.status = status;
        self.total_duration_ms = Some((now - self.started_at).num_milliseconds().max(0) as u64);
    }
}

/// Thread-safe store of the most recent request logs
#[derive(Debug, Clone, Default)]
pub struct RequestLogStore {
    logs: Arc<Mutex<VecDeque<RequestLog>>>,
}

impl RequestLogStore {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOGS))),
        }
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<RequestLog>> {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a finished log, evicting the oldest past the limit
    pub fn record(&self, log: RequestLog) {
        let mut logs = self.lock();
        if logs.len() >= MAX_LOGS {
            logs.pop_front();
        }
        logs.push_back(log);
    }

    /// Get all stored logs (most recent first)
    pub fn get_logs(&self, limit: Option<usize>) -> Vec<RequestLog> {
        let logs = self.lock();
        let take = limit.unwrap_or(logs.len());
        logs.iter().rev().take(take).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_log(kind: RequestKind) -> RequestLog {
        RequestLog::new(kind, Platform::LinkedIn, "Friendly", "openai", "gpt-3.5-turbo")
    }

    #[test]
    fn test_request_log_creation() {
        let log = new_log(RequestKind::Suggestions);
        assert_eq!(log.kind, RequestKind::Suggestions);
        assert_eq!(log.tone, "Friendly");
        assert_eq!(log.llm_model, "gpt-3.5-turbo");
        assert_eq!(log.status, RequestStatus::InProgress);
        assert_eq!(log.error_message, None);
    }

    #[test]
    fn test_log_entries() {
        let mut log = new_log(RequestKind::Improve);
        log.info("Prompt composed");
        log.warn_with_details("Padded comment slots", "Nice!");
        log.complete_error("API error: 500");

        assert_eq!(log.entries.len(), 3);
        assert_eq!(log.entries[0].level, LogLevel::Info);
        assert_eq!(log.entries[1].level, LogLevel::Warn);
        assert_eq!(log.entries[1].details.as_deref(), Some("Nice!"));
        assert_eq!(log.entries[2].level, LogLevel::Error);
        assert_eq!(log.status, RequestStatus::Error);
        assert_eq!(log.error_message.as_deref(), Some("API error: 500"));
        assert!(log.completed_at.is_some());
    }

    #[test]
    fn test_log_store_most_recent_first() {
        let store = RequestLogStore::new();

        let mut first = new_log(RequestKind::Suggestions);
        first.complete_success();
        let id1 = first.id.clone();
        store.record(first);

        let mut second = new_log(RequestKind::CreatePost);
        second.complete_success();
        let id2 = second.id.clone();
        store.record(second);

        let logs = store.get_logs(None);
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].id, id2);
        assert_eq!(logs[1].id, id1);
        assert_eq!(store.get_logs(Some(1)).len(), 1);
    }

    #[test]
    fn test_log_store_is_bounded() {
        let store = RequestLogStore::new();
        assert!(store.is_empty());

        let mut ids = Vec::new();
        for _ in 0..(MAX_LOGS + 5) {
            let log = new_log(RequestKind::Suggestions);
            ids.push(log.id.clone());
            store.record(log);
        }
        assert_eq!(store.len(), MAX_LOGS);
        // The five oldest were evicted
        assert_eq!(store.get_logs(None).last().map(|l| l.id.clone()), Some(ids[5].clone()));
    }

    #[test]
    fn test_serialized_shape() {
        let mut log = new_log(RequestKind::CreatePost);
        log.complete_success();
        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["kind"], "create_post");
        assert_eq!(value["platform"], "linkedin");
        assert_eq!(value["status"], "success");
        assert!(value.get("ended_at").is_some());
    }
}
