//! Load command - reloads stored messages from their file.

use crate::commands::CommandHandler;
use crate::console::Console;
use crate::error::AppResult;
use async_trait::async_trait;
use message_store::MessageStore;
use tracing::error;

pub struct LoadHandler {
    messages: MessageStore,
}

impl LoadHandler {
    pub fn new(messages: MessageStore) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl CommandHandler for LoadHandler {
    fn name(&self) -> &str {
        "Load Stored Messages"
    }

    fn trigger(&self) -> &str {
        "8"
    }

    async fn execute(&self, _console: &mut dyn Console) -> AppResult<String> {
        match self.messages.load_stored().await {
            Ok(count) => Ok(format!("Loaded {} stored message(s) from file.", count)),
            Err(e) => {
                error!("Failed to load stored messages: {}", e);
                Ok("Stored messages could not be loaded.".into())
            }
        }
    }
}
