use std::sync::Arc;

use teloxide::prelude::*;

use karniz_core::domain::ChatId;

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat = ChatId(msg.chat.id.0);
    let (cmd, _args) = parse_command(text);

    let result = match cmd.as_str() {
        "start" => state.dialog.on_start(state.messenger.as_ref(), chat).await,
        "cancel" => state.dialog.on_cancel(state.messenger.as_ref(), chat).await,
        "test" => {
            state
                .dialog
                .on_reference_check(state.messenger.as_ref(), chat)
                .await
        }
        _ => bot
            .send_message(msg.chat.id, "Неизвестная команда. Нажмите /start.")
            .await
            .map(|_| ())
            .map_err(|e| karniz_core::Error::External(format!("telegram error: {e}"))),
    };

    if let Err(e) = result {
        tracing::warn!("command /{cmd} failed for chat {}: {e}", chat.0);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_parsing_strips_bot_name_and_args() {
        assert_eq!(parse_command("/start"), ("start".into(), "".into()));
        assert_eq!(
            parse_command("/start@karniz_bot"),
            ("start".into(), "".into())
        );
        assert_eq!(parse_command("/TEST extra"), ("test".into(), "extra".into()));
    }
}
