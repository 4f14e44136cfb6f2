//! Longest command - shows the longest message across all buckets.

use crate::commands::CommandHandler;
use crate::console::Console;
use crate::error::AppResult;
use async_trait::async_trait;
use message_store::MessageStore;

pub struct LongestHandler {
    messages: MessageStore,
}

impl LongestHandler {
    pub fn new(messages: MessageStore) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl CommandHandler for LongestHandler {
    fn name(&self) -> &str {
        "Find Longest Message"
    }

    fn trigger(&self) -> &str {
        "4"
    }

    async fn execute(&self, _console: &mut dyn Console) -> AppResult<String> {
        let longest = self.messages.longest_message().await;

        if longest.is_empty() {
            Ok("No messages found.".into())
        } else {
            Ok(format!(
                "Longest message: \"{}\"\nLength: {} characters",
                longest,
                longest.chars().count()
            ))
        }
    }
}
