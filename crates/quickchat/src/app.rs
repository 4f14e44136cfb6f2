//! Session flow: sign in, then the main menu until the user quits.

use crate::commands::{default_handlers, CommandHandler};
use crate::console::Console;
use crate::error::AppResult;
use account_registry::{login_status, Accounts, Credential, Registration};
use message_store::MessageStore;
use std::sync::Arc;
use tracing::info;

const QUIT: &str = "0";

/// One QuickChat run over shared account and message state.
pub struct App {
    accounts: Arc<Accounts>,
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl App {
    /// Create an app with the standard main menu.
    pub fn new(accounts: Arc<Accounts>, messages: MessageStore) -> Self {
        Self::with_handlers(accounts, default_handlers(&messages))
    }

    pub fn with_handlers(accounts: Arc<Accounts>, handlers: Vec<Box<dyn CommandHandler>>) -> Self {
        info!("Registered {} command handlers", handlers.len());
        Self { accounts, handlers }
    }

    /// Run until the user quits or input ends.
    pub async fn run(&self, console: &mut dyn Console) -> AppResult<()> {
        console.say("Welcome to QuickChat");

        if let Some(user) = self.sign_in(console).await? {
            info!("User {} signed in", user.username);
            self.main_menu(console).await?;
        }

        console.say("Thank you for using QuickChat!");
        Ok(())
    }

    /// Register or log in. `None` means the user chose to quit.
    async fn sign_in(&self, console: &mut dyn Console) -> AppResult<Option<Credential>> {
        loop {
            console.say("\n1. Register\n2. Login\n3. Clear All Accounts\n0. Quit");
            let choice = console.choice("Enter your choice:").await?;

            match choice.as_str() {
                "1" => self.register(console).await?,
                "2" => {
                    if let Some(user) = self.login(console).await? {
                        return Ok(Some(user));
                    }
                }
                "3" => self.clear_accounts(console).await?,
                QUIT => return Ok(None),
                _ => console.say("Invalid choice. Please try again."),
            }
        }
    }

    async fn register(&self, console: &mut dyn Console) -> AppResult<()> {
        let registration = Registration {
            first_name: console.prompt("Enter your first name:").await?,
            last_name: console.prompt("Enter your last name:").await?,
            username: console.prompt("Enter a username:").await?,
            password: console.prompt("Enter a password:").await?,
            cell_phone_number: console
                .prompt("Enter your cell phone number (+27...):")
                .await?,
        };

        match self.accounts.register(registration).await {
            Ok(message) => console.say(message),
            Err(e) => console.say(&e.to_string()),
        }
        Ok(())
    }

    async fn login(&self, console: &mut dyn Console) -> AppResult<Option<Credential>> {
        let username = console.prompt("Username:").await?;
        let password = console.prompt("Password:").await?;

        let user = self.accounts.login(&username, &password).await;
        console.say(&login_status(user.as_ref()));
        Ok(user)
    }

    async fn clear_accounts(&self, console: &mut dyn Console) -> AppResult<()> {
        let confirm = console
            .choice("Type YES to remove every registered account:")
            .await?;
        if confirm == "YES" {
            let removed = self.accounts.clear_all().await;
            console.say(&format!("Removed {} account(s).", removed));
        } else {
            console.say("No accounts were removed.");
        }
        Ok(())
    }

    fn menu(&self) -> String {
        let mut menu = String::from("\nPlease select an option:");
        for handler in &self.handlers {
            menu.push_str(&format!("\n{}. {}", handler.trigger(), handler.name()));
        }
        menu.push_str(&format!("\n{}. Quit", QUIT));
        menu
    }

    async fn main_menu(&self, console: &mut dyn Console) -> AppResult<()> {
        loop {
            console.say(&self.menu());
            let choice = console.choice("Enter your choice:").await?;

            if choice == QUIT || choice.eq_ignore_ascii_case("quit") {
                return Ok(());
            }

            match self.handlers.iter().find(|h| h.matches(&choice)) {
                Some(handler) => {
                    let reply = handler.execute(console).await?;
                    console.say(&reply);
                }
                None => console.say("Invalid choice. Please try again."),
            }
        }
    }
}
