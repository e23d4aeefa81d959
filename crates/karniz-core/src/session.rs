//! Per-chat conversation state.
//!
//! The only mutable thing in the whole bot: which step of the dialog a chat
//! is on, and the mode it picked. One entry per chat; entries are created
//! on `/start`, reset when a calculation completes and removed on cancel.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::{calc::Mode, domain::ChatId};

/// Where one conversation currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogState {
    ChoosingMode,
    EnteringLength { mode: Mode },
}

/// Owns the dialog state of every active chat. Transitions are the only
/// way to mutate it, so at most one mode is remembered per chat at a time.
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<ChatId, DialogState>>,
}

impl SessionStore {
    pub async fn state(&self, chat: ChatId) -> Option<DialogState> {
        self.inner.lock().await.get(&chat).copied()
    }

    /// `/start` or "new calculation": drop whatever was there and begin at
    /// the mode menu.
    pub async fn begin(&self, chat: ChatId) {
        self.inner
            .lock()
            .await
            .insert(chat, DialogState::ChoosingMode);
    }

    /// Mode picked from the menu; the chat now awaits a length.
    pub async fn choose_mode(&self, chat: ChatId, mode: Mode) {
        self.inner
            .lock()
            .await
            .insert(chat, DialogState::EnteringLength { mode });
    }

    /// "Back" from length entry; the picked mode is discarded.
    pub async fn back_to_menu(&self, chat: ChatId) {
        self.inner
            .lock()
            .await
            .insert(chat, DialogState::ChoosingMode);
    }

    /// A result was rendered; return to the menu with no mode remembered.
    pub async fn complete(&self, chat: ChatId) {
        self.inner
            .lock()
            .await
            .insert(chat, DialogState::ChoosingMode);
    }

    /// Cancel: the chat's session data is removed entirely.
    pub async fn end(&self, chat: ChatId) {
        self.inner.lock().await.remove(&chat);
    }
}
