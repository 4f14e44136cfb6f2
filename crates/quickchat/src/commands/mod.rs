//! Main menu command handlers.

mod delete;
mod load;
mod longest;
mod report;
mod search;
mod send;

pub use delete::DeleteHandler;
pub use load::LoadHandler;
pub use longest::LongestHandler;
pub use report::{ReportHandler, SentListHandler};
pub use search::{SearchIdHandler, SearchRecipientHandler};
pub use send::SendHandler;

use crate::console::Console;
use crate::error::AppResult;
use async_trait::async_trait;
use message_store::MessageStore;

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Menu label (e.g., "Search by Message ID").
    fn name(&self) -> &str;

    /// Menu key (e.g., "2").
    fn trigger(&self) -> &str;

    /// Check if this handler matches the user's menu choice.
    fn matches(&self, choice: &str) -> bool {
        let choice = choice.trim();
        choice == self.trigger() || choice.eq_ignore_ascii_case(self.name())
    }

    /// Execute the command, returning the text to show when it finishes.
    async fn execute(&self, console: &mut dyn Console) -> AppResult<String>;
}

/// Handlers for every main menu entry, in menu order.
pub fn default_handlers(messages: &MessageStore) -> Vec<Box<dyn CommandHandler>> {
    vec![
        Box::new(SendHandler::new(messages.clone())),
        Box::new(SearchIdHandler::new(messages.clone())),
        Box::new(SearchRecipientHandler::new(messages.clone())),
        Box::new(LongestHandler::new(messages.clone())),
        Box::new(DeleteHandler::new(messages.clone())),
        Box::new(ReportHandler::new(messages.clone())),
        Box::new(SentListHandler::new(messages.clone())),
        Box::new(LoadHandler::new(messages.clone())),
    ]
}
