
use crate::llm::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

type Responder = Box<dyn Fn(&str, &str) -> Result<String, LlmError> + Send + Sync>;

/// In-process provider that answers from a closure and records every call
pub(crate) struct ScriptedProvider {
    respond: Responder,
    calls: Mutex<Vec<(String, String)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedProvider {
    pub(crate) fn new(
        respond: impl Fn(&str, &str) -> Result<String, LlmError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Answer DM prompts with `dm` and every other prompt with `comments`
    pub(crate) fn suggestions(comments: &str, dm: &str) -> Self {
        let comments = comments.to_string();
        let dm = dm.to_string();
        Self::new(move |_, user| {
            if is_dm_prompt(user) {
                Ok(dm.clone())
            } else {
                Ok(comments.clone())
            }
        })
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

pub(crate) fn is_dm_prompt(user_message: &str) -> bool {
    user_message.starts_with("Write a short, human-sounding direct message")
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_message.to_string()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        // Let the sibling request start before this one finishes
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        (self.respond)(system_prompt, user_message)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }
}
