//! Common test utilities for integration tests.

use account_registry::{Accounts, Registry};
use async_trait::async_trait;
use message_store::MessageStore;
use quickchat::{App, Console};
use snapshot_store::Store;
use std::collections::VecDeque;
use std::sync::Arc;

/// Console that replays canned answers and records everything written.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: String,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: String::new(),
        }
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self) -> Option<String> {
        self.inputs.pop_front()
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }
}

/// Fresh in-memory accounts and messages plus an app over them.
pub fn test_app() -> (App, Arc<Accounts>, MessageStore) {
    let accounts = Arc::new(Accounts::new(Registry::new(), Store::memory()));
    let messages = MessageStore::new(Store::memory());
    let app = App::new(accounts.clone(), messages.clone());
    (app, accounts, messages)
}

/// Answers that register `kyl_1` and log in with it.
pub const REGISTER_AND_LOGIN: &[&str] = &[
    "1",
    "John",
    "Doe",
    "kyl_1",
    "Ch&&sec@ke99!",
    "+27838968976",
    "2",
    "kyl_1",
    "Ch&&sec@ke99!",
];
