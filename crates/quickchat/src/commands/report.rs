//! Report commands - full report and the list of sent messages.

use crate::commands::CommandHandler;
use crate::console::Console;
use crate::error::AppResult;
use async_trait::async_trait;
use message_store::{Bucket, MessageStore};

pub struct ReportHandler {
    messages: MessageStore,
}

impl ReportHandler {
    pub fn new(messages: MessageStore) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl CommandHandler for ReportHandler {
    fn name(&self) -> &str {
        "Show Comprehensive Report"
    }

    fn trigger(&self) -> &str {
        "6"
    }

    async fn execute(&self, _console: &mut dyn Console) -> AppResult<String> {
        Ok(self.messages.report().await.to_string())
    }
}

pub struct SentListHandler {
    messages: MessageStore,
}

impl SentListHandler {
    pub fn new(messages: MessageStore) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl CommandHandler for SentListHandler {
    fn name(&self) -> &str {
        "Show Sent Messages"
    }

    fn trigger(&self) -> &str {
        "7"
    }

    async fn execute(&self, _console: &mut dyn Console) -> AppResult<String> {
        let sent = self.messages.messages(Bucket::Sent).await;

        let mut reply = String::from("=== SENT MESSAGES ===");
        if sent.is_empty() {
            reply.push_str("\nNo messages have been sent.");
        }
        for (i, message) in sent.iter().enumerate() {
            reply.push_str(&format!(
                "\nMessage {}:\n  Hash: {}\n  Recipient: {}\n  Message: {}",
                i + 1,
                message.hash(),
                message.recipient(),
                message.text()
            ));
        }
        Ok(reply)
    }
}
