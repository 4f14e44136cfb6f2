//! Search commands - look messages up by ID or by recipient.

use crate::commands::CommandHandler;
use crate::console::Console;
use crate::error::AppResult;
use async_trait::async_trait;
use message_store::MessageStore;

pub struct SearchIdHandler {
    messages: MessageStore,
}

impl SearchIdHandler {
    pub fn new(messages: MessageStore) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl CommandHandler for SearchIdHandler {
    fn name(&self) -> &str {
        "Search by Message ID"
    }

    fn trigger(&self) -> &str {
        "2"
    }

    async fn execute(&self, console: &mut dyn Console) -> AppResult<String> {
        let id = console.prompt("Enter Message ID to search:").await?;

        Ok(match self.messages.search_by_id(&id).await {
            Some(text) => format!("Found message: \"{}\"", text),
            None => "Message not found.".into(),
        })
    }
}

pub struct SearchRecipientHandler {
    messages: MessageStore,
}

impl SearchRecipientHandler {
    pub fn new(messages: MessageStore) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl CommandHandler for SearchRecipientHandler {
    fn name(&self) -> &str {
        "Search by Recipient"
    }

    fn trigger(&self) -> &str {
        "3"
    }

    async fn execute(&self, console: &mut dyn Console) -> AppResult<String> {
        let recipient = console.prompt("Enter recipient cell number:").await?;
        let found = self.messages.search_by_recipient(&recipient).await;

        if found.is_empty() {
            return Ok("No messages found for that recipient.".into());
        }

        let mut reply = format!("Found {} message(s) for {}:", found.len(), recipient);
        for (i, message) in found.iter().enumerate() {
            reply.push_str(&format!("\n  {}. {}", i + 1, message.text()));
        }
        Ok(reply)
    }
}
