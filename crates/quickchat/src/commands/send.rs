//! Send command - composes a batch of messages and applies an action to each.

use crate::commands::CommandHandler;
use crate::console::Console;
use crate::error::AppResult;
use async_trait::async_trait;
use message_store::{
    check_message_length, check_recipient_cell, Message, MessageAction, MessageStore,
};
use tracing::info;

pub struct SendHandler {
    messages: MessageStore,
}

impl SendHandler {
    pub fn new(messages: MessageStore) -> Self {
        Self { messages }
    }

    async fn ask_count(&self, console: &mut dyn Console) -> AppResult<u32> {
        loop {
            let answer = console
                .choice("How many messages would you like to send?")
                .await?;
            match answer.parse::<u32>() {
                Ok(count) => return Ok(count),
                Err(_) => console.say("Please enter a whole number."),
            }
        }
    }

    async fn ask_recipient(&self, console: &mut dyn Console) -> AppResult<String> {
        loop {
            let recipient = console.prompt("Enter recipient cell number:").await?;
            match check_recipient_cell(&recipient) {
                Ok(_) => return Ok(recipient),
                Err(e) => console.say(&e.to_string()),
            }
        }
    }

    async fn ask_text(&self, console: &mut dyn Console) -> AppResult<String> {
        loop {
            let text = console.prompt("Enter your message:").await?;
            let check = check_message_length(Some(&text));
            if check.is_ready() {
                return Ok(text);
            }
            console.say(&check.to_string());
        }
    }

    async fn ask_action(&self, console: &mut dyn Console) -> AppResult<MessageAction> {
        loop {
            let answer = console
                .choice("What would you like to do? (Send/Store/Disregard):")
                .await?;
            match answer.parse::<MessageAction>() {
                Ok(action) => return Ok(action),
                Err(e) => console.say(&e.to_string()),
            }
        }
    }
}

#[async_trait]
impl CommandHandler for SendHandler {
    fn name(&self) -> &str {
        "Send Messages"
    }

    fn trigger(&self) -> &str {
        "1"
    }

    async fn execute(&self, console: &mut dyn Console) -> AppResult<String> {
        let count = self.ask_count(console).await?;

        for sequence in 0..count {
            console.say(&format!("\n--- Message {} ---", sequence + 1));

            let recipient = self.ask_recipient(console).await?;
            let text = self.ask_text(console).await?;

            let message = Message::new(recipient, text, sequence);
            console.say(&message.to_string());

            let action = self.ask_action(console).await?;
            self.messages.apply(message, action).await;
            console.say(action.status());
        }

        let total = self.messages.total_sent().await;
        info!("Batch of {} messages processed", count);
        Ok(format!("Total messages sent: {}", total))
    }
}
