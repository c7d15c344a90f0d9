//! Responder that records outgoing messages instead of sending them

use std::sync::Mutex;
use async_trait::async_trait;
use stock_bot::handlers::Menu;
use stock_bot::services::Responder;
use stock_bot::{Result, StockBotError};
use teloxide::types::ChatId;
use teloxide::RequestError;

/// One outgoing message
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { text: String, menu: Option<Menu> },
    Document { file_name: String, bytes: Vec<u8>, menu: Option<Menu> },
}

impl Sent {
    pub fn text(&self) -> Option<&str> {
        match self {
            Sent::Text { text, .. } => Some(text),
            Sent::Document { .. } => None,
        }
    }

    pub fn menu(&self) -> Option<&Menu> {
        match self {
            Sent::Text { menu, .. } | Sent::Document { menu, .. } => menu.as_ref(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingResponder {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn send_text(&self, text: &str, menu: Option<Menu>) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text { text: text.to_string(), menu });
        Ok(())
    }

    async fn send_document(&self, file_name: &str, bytes: Vec<u8>, menu: Option<Menu>) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Document {
            file_name: file_name.to_string(),
            bytes,
            menu,
        });
        Ok(())
    }
}

/// Responder whose every delivery fails, as when the chat is unreachable
#[derive(Debug, Default)]
pub struct FailingResponder;

fn delivery_error() -> StockBotError {
    StockBotError::Telegram(RequestError::MigrateToChatId(ChatId(-100)))
}

#[async_trait]
impl Responder for FailingResponder {
    async fn send_text(&self, _text: &str, _menu: Option<Menu>) -> Result<()> {
        Err(delivery_error())
    }

    async fn send_document(&self, _file_name: &str, _bytes: Vec<u8>, _menu: Option<Menu>) -> Result<()> {
        Err(delivery_error())
    }
}
