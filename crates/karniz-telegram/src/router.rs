use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use karniz_core::{config::Config, dialog::Dialog, messaging::port::Messenger};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub dialog: Arc<Dialog>,
    pub messenger: Arc<dyn Messenger>,
}

pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!("karniz bot started: @{}", me.username()),
        Err(e) => tracing::warn!("get_me failed (starting anyway): {e}"),
    }

    let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState {
        dialog: Arc::new(Dialog::new()),
        messenger,
    });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
