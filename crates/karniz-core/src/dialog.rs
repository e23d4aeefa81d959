//! Conversation engine: two states, a handful of transitions.
//!
//! All transport goes through the `Messenger` port; the engine never sees
//! teloxide types. Handlers in the adapter crate are thin shims over
//! `on_start` / `on_callback` / `on_length` / `on_cancel`.

use crate::{
    calc::{calc, Mode},
    domain::{ChatId, MessageRef},
    formatting::{format_reference_report, format_result},
    messaging::{
        port::Messenger,
        types::{InlineButton, InlineKeyboard},
    },
    parse::parse_length,
    session::{DialogState, SessionStore},
    Result,
};

const CB_CENTER: &str = "mode_center";
const CB_LR: &str = "mode_lr";
const CB_NEW: &str = "new_calc";
const CB_BACK: &str = "back_to_menu";

const CHOOSE_MODE_PROMPT: &str = "Выберите режим расчёта:";
const CHOOSE_MODE_FIRST: &str = "Сначала выберите режим:";
const LENGTH_HINT: &str = "Введите число в см (например: 404 или 404.5):";
const CANCELLED: &str = "Ок. Нажмите /start чтобы начать заново.";

/// Everything a menu button can mean. Closed: unknown callback data never
/// reaches the engine as an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    ChooseMode(Mode),
    NewCalc,
    BackToMenu,
}

impl MenuAction {
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            CB_CENTER => Some(MenuAction::ChooseMode(Mode::Center)),
            CB_LR => Some(MenuAction::ChooseMode(Mode::LeftRight)),
            CB_NEW => Some(MenuAction::NewCalc),
            CB_BACK => Some(MenuAction::BackToMenu),
            _ => None,
        }
    }
}

fn mode_menu() -> InlineKeyboard {
    InlineKeyboard::one_row(vec![
        InlineButton::new(Mode::Center.label(), CB_CENTER),
        InlineButton::new(Mode::LeftRight.label(), CB_LR),
    ])
}

fn after_result_menu() -> InlineKeyboard {
    InlineKeyboard::single(InlineButton::new("Начать новый расчёт", CB_NEW))
}

fn back_menu() -> InlineKeyboard {
    InlineKeyboard::single(InlineButton::new("⬅️ Назад к выбору", CB_BACK))
}

fn length_prompt(mode: Mode) -> String {
    format!("Режим: {}.\nВведите длину карниза X (см):", mode.label())
}

/// The dialog engine. One instance serves every chat; per-chat state lives
/// in the session store.
#[derive(Default)]
pub struct Dialog {
    sessions: SessionStore,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// `/start`: clear any prior session and show the mode menu.
    pub async fn on_start(&self, messenger: &dyn Messenger, chat: ChatId) -> Result<()> {
        self.sessions.begin(chat).await;
        messenger
            .send_menu(chat, CHOOSE_MODE_PROMPT, mode_menu())
            .await?;
        Ok(())
    }

    /// A menu button was pressed. `message` is the menu message the button
    /// lives on; when present it is edited in place, otherwise a fresh
    /// message is sent.
    pub async fn on_callback(
        &self,
        messenger: &dyn Messenger,
        chat: ChatId,
        message: Option<MessageRef>,
        callback_id: &str,
        data: &str,
    ) -> Result<()> {
        messenger.answer_callback(callback_id, None).await?;

        let Some(action) = MenuAction::parse(data) else {
            // Stale button from an old bot version; nothing to do.
            return Ok(());
        };

        match action {
            MenuAction::ChooseMode(mode) => {
                if self.sessions.state(chat).await == Some(DialogState::ChoosingMode) {
                    self.sessions.choose_mode(chat, mode).await;
                    self.render(messenger, chat, message, &length_prompt(mode), back_menu())
                        .await?;
                } else {
                    // Button pressed out of turn (e.g. after a restart):
                    // fall back to a fresh menu.
                    self.sessions.begin(chat).await;
                    self.render(messenger, chat, message, CHOOSE_MODE_PROMPT, mode_menu())
                        .await?;
                }
            }
            MenuAction::NewCalc => {
                self.sessions.begin(chat).await;
                self.render(messenger, chat, message, CHOOSE_MODE_PROMPT, mode_menu())
                    .await?;
            }
            MenuAction::BackToMenu => {
                self.sessions.back_to_menu(chat).await;
                self.render(messenger, chat, message, CHOOSE_MODE_PROMPT, mode_menu())
                    .await?;
            }
        }

        Ok(())
    }

    /// Plain text arrived. Only meaningful while the chat is entering a
    /// length; otherwise point the user back at the menu.
    pub async fn on_length(&self, messenger: &dyn Messenger, chat: ChatId, text: &str) -> Result<()> {
        let Some(DialogState::EnteringLength { mode }) = self.sessions.state(chat).await else {
            self.sessions.begin(chat).await;
            messenger
                .send_menu(chat, CHOOSE_MODE_FIRST, mode_menu())
                .await?;
            return Ok(());
        };

        match parse_length(text) {
            Ok(x) => {
                let result = calc(mode, x);
                messenger
                    .send_menu(chat, &format_result(&result), after_result_menu())
                    .await?;
                self.sessions.complete(chat).await;
            }
            Err(_) => {
                // Invalid input keeps the chat in EnteringLength.
                messenger.send_text(chat, LENGTH_HINT).await?;
            }
        }

        Ok(())
    }

    /// `/cancel`: forget the chat entirely.
    pub async fn on_cancel(&self, messenger: &dyn Messenger, chat: ChatId) -> Result<()> {
        self.sessions.end(chat).await;
        messenger.send_text(chat, CANCELLED).await?;
        Ok(())
    }

    /// `/test`: self-check over the control lengths.
    pub async fn on_reference_check(&self, messenger: &dyn Messenger, chat: ChatId) -> Result<()> {
        messenger.send_text(chat, &format_reference_report()).await?;
        Ok(())
    }

    async fn render(
        &self,
        messenger: &dyn Messenger,
        chat: ChatId,
        message: Option<MessageRef>,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()> {
        match message {
            Some(msg) => messenger.edit_menu(msg, text, keyboard).await,
            None => messenger
                .send_menu(chat, text, keyboard)
                .await
                .map(|_| ()),
        }
    }
}
