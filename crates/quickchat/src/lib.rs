//! QuickChat console messenger.

pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;

pub use app::App;
pub use config::Config;
pub use console::{Console, StdioConsole};
pub use error::{AppError, AppResult};
