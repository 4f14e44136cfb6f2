//! Delete command - removes a message by its hash.

use crate::commands::CommandHandler;
use crate::console::Console;
use crate::error::AppResult;
use async_trait::async_trait;
use message_store::MessageStore;
use tracing::info;

pub struct DeleteHandler {
    messages: MessageStore,
}

impl DeleteHandler {
    pub fn new(messages: MessageStore) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl CommandHandler for DeleteHandler {
    fn name(&self) -> &str {
        "Delete Message by Hash"
    }

    fn trigger(&self) -> &str {
        "5"
    }

    async fn execute(&self, console: &mut dyn Console) -> AppResult<String> {
        let hash = console.prompt("Enter message hash to delete:").await?;

        match self.messages.delete_by_hash(&hash).await {
            Some(bucket) => {
                info!("Deleted message {} from {} bucket", hash, bucket);
                Ok(format!("Message successfully deleted from {} messages.", bucket))
            }
            None => Ok("Message with that hash not found.".into()),
        }
    }
}
