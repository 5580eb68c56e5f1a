//! Chat transport abstraction and the console stand-in

use crate::errors::{Result, TrackerError};

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;
use tracing::debug;

pub type ChatId = i64;
pub type MessageId = i64;

/// Inline keyboard button: visible text plus callback payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub text: String,
    pub data: String,
}

impl Button {
    pub fn new(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: data.into(),
        }
    }
}

/// Rows of buttons
pub type Keyboard = Vec<Vec<Button>>;

/// Split buttons into rows of `columns`
pub fn layout(buttons: Vec<Button>, columns: usize) -> Keyboard {
    let columns = columns.max(1);
    let mut rows: Keyboard = Vec::new();
    for button in buttons {
        match rows.last_mut() {
            Some(row) if row.len() < columns => row.push(button),
            _ => rows.push(vec![button]),
        }
    }
    rows
}

/// Operations the bot needs from a chat network
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_message(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<MessageId>;

    async fn edit_message(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()>;

    async fn delete_message(&self, chat: ChatId, message: MessageId) -> Result<()>;

    /// Acknowledge a button press, optionally with a popup text
    async fn answer_callback(&self, callback_id: &str, text: Option<&str>, alert: bool) -> Result<()>;
}

/// Transport that prints every message to stdout.
///
/// Button payloads are shown next to their labels so they can be typed
/// back in as callbacks.
pub struct ConsoleTransport {
    out: Mutex<Stdout>,
    next_id: AtomicI64,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
            next_id: AtomicI64::new(1),
        }
    }

    async fn write(&self, text: String) -> Result<()> {
        let mut out = self.out.lock().await;
        out.write_all(text.as_bytes())
            .await
            .map_err(|e| TrackerError::Transport(e.to_string()))?;
        out.flush()
            .await
            .map_err(|e| TrackerError::Transport(e.to_string()))
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text rendering of a message and its keyboard
pub fn render_console(header: &str, text: &str, keyboard: Option<&Keyboard>) -> String {
    let mut rendered = format!("{}\n{}\n", header, text);
    for row in keyboard.into_iter().flatten() {
        let cells: Vec<String> = row
            .iter()
            .map(|b| format!("[{} -> {}]", b.text, b.data))
            .collect();
        rendered.push_str(&cells.join(" "));
        rendered.push('\n');
    }
    rendered
}

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn send_message(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<MessageId> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let header = format!("--- chat {} / message {} ---", chat, id);
        self.write(render_console(&header, text, keyboard)).await?;
        Ok(id)
    }

    async fn edit_message(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()> {
        let header = format!("--- chat {} / message {} (edited) ---", chat, message);
        self.write(render_console(&header, text, keyboard)).await
    }

    async fn delete_message(&self, chat: ChatId, message: MessageId) -> Result<()> {
        debug!("Deleting message {} in chat {}", message, chat);
        self.write(format!("--- chat {} / message {} deleted ---\n", chat, message))
            .await
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>, alert: bool) -> Result<()> {
        match text {
            Some(text) if alert => self.write(format!("(!) {}\n", text)).await,
            Some(text) => self.write(format!("{}\n", text)).await,
            None => {
                debug!("Callback {} answered", callback_id);
                Ok(())
            }
        }
    }
}
