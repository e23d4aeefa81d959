use std::sync::Arc;

use teloxide::prelude::*;

use karniz_core::domain::ChatId;

use crate::router::AppState;

pub async fn handle_text(_bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text().map(|s| s.to_string()) else {
        return Ok(());
    };
    if text.trim().is_empty() {
        return Ok(());
    }

    let chat = ChatId(msg.chat.id.0);
    if let Err(e) = state
        .dialog
        .on_length(state.messenger.as_ref(), chat, &text)
        .await
    {
        tracing::warn!("text handling failed for chat {}: {e}", chat.0);
    }

    Ok(())
}
