use std::sync::Arc;

use teloxide::prelude::*;

use karniz_core::domain::{ChatId, MessageId, MessageRef};

use crate::router::AppState;

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let cb_id = q.id.clone();
    let data = q.data.clone().unwrap_or_default();

    // Without the originating message there is no chat to act on; just
    // acknowledge the press so the client stops its spinner.
    let Some(message) = q.message.as_ref() else {
        let _ = bot.answer_callback_query(cb_id).await;
        return Ok(());
    };

    let chat = ChatId(message.chat.id.0);
    let menu_msg = MessageRef {
        chat_id: chat,
        message_id: MessageId(message.id.0),
    };

    if let Err(e) = state
        .dialog
        .on_callback(
            state.messenger.as_ref(),
            chat,
            Some(menu_msg),
            &cb_id,
            &data,
        )
        .await
    {
        tracing::warn!("callback handling failed for chat {}: {e}", chat.0);
    }

    Ok(())
}
