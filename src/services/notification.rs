//! Outbound message delivery
//!
//! Conversation handlers talk to the user through [`Responder`], so the flow
//! logic never depends on the Telegram client directly.

use async_trait::async_trait;
use teloxide::{
    Bot,
    payloads::{SendDocumentSetters, SendMessageSetters},
    requests::Requester,
    types::{ChatId, InputFile, KeyboardButton, KeyboardMarkup},
};
use tracing::debug;

use crate::handlers::menus::Menu;
use crate::utils::errors::Result;

/// Sends replies to the user of the current conversation
#[async_trait]
pub trait Responder: Send + Sync {
    /// Send a text message, optionally replacing the reply keyboard
    async fn send_text(&self, text: &str, menu: Option<Menu>) -> Result<()>;

    /// Send a file attachment, optionally replacing the reply keyboard
    async fn send_document(&self, file_name: &str, bytes: Vec<u8>, menu: Option<Menu>) -> Result<()>;
}

/// Responder bound to one Telegram chat
#[derive(Clone)]
pub struct TelegramResponder {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramResponder {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

/// One button per row, resized to fit the labels
fn keyboard(menu: &Menu) -> KeyboardMarkup {
    let rows = menu
        .labels()
        .iter()
        .map(|label| vec![KeyboardButton::new(label.clone())]);
    KeyboardMarkup::new(rows).resize_keyboard()
}

#[async_trait]
impl Responder for TelegramResponder {
    async fn send_text(&self, text: &str, menu: Option<Menu>) -> Result<()> {
        debug!(chat_id = self.chat_id.0, chars = text.chars().count(), "Sending message");

        let request = self.bot.send_message(self.chat_id, text);
        match menu {
            Some(menu) => request.reply_markup(keyboard(&menu)).await?,
            None => request.await?,
        };
        Ok(())
    }

    async fn send_document(&self, file_name: &str, bytes: Vec<u8>, menu: Option<Menu>) -> Result<()> {
        debug!(chat_id = self.chat_id.0, file_name = file_name, size = bytes.len(), "Sending document");

        let file = InputFile::memory(bytes).file_name(file_name.to_string());
        let request = self.bot.send_document(self.chat_id, file);
        match menu {
            Some(menu) => request.reply_markup(keyboard(&menu)).await?,
            None => request.await?,
        };
        Ok(())
    }
}
