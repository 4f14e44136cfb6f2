//! Line-oriented terminal surface.

use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::io::Write;
use std::pin::Pin;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::{Stream, StreamExt};
use tracing::error;

/// Where prompts are written and answers are read from.
#[async_trait]
pub trait Console: Send {
    /// Next input line without its line ending, or `None` once input is closed.
    async fn read_line(&mut self) -> Option<String>;

    /// Write text as-is.
    fn write(&mut self, text: &str);

    /// Write text followed by a newline.
    fn say(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    /// Ask a question and return the answer exactly as typed.
    async fn prompt(&mut self, question: &str) -> AppResult<String> {
        self.write(question);
        self.write(" ");
        self.read_line().await.ok_or(AppError::InputClosed)
    }

    /// Ask for a menu choice, action or number; surrounding whitespace is dropped.
    async fn choice(&mut self, question: &str) -> AppResult<String> {
        let answer = self.prompt(question).await?;
        Ok(answer.trim().to_string())
    }
}


/// Console over the process's stdin and stdout.
pub struct StdioConsole {
    lines: Pin<Box<dyn Stream<Item = String> + Send>>,
}

impl StdioConsole {
    pub fn new() -> Self {
        let lines = async_stream::stream! {
            let mut reader = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match reader.next_line().await {
                    Ok(Some(line)) => yield line,
                    Ok(None) => break,
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
        };

        Self {
            lines: Box::pin(lines),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdioConsole {
    async fn read_line(&mut self) -> Option<String> {
        self.lines.next().await
    }

    fn write(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            error!("Failed to write output: {}", e);
        }
    }
}
