use std::sync::Arc;

use karniz_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), karniz_core::Error> {
    karniz_core::logging::init("karniz");

    // Config errors (no BOT_TOKEN) are fatal before any Telegram I/O.
    let cfg = Arc::new(Config::load().inspect_err(|e| tracing::error!("{e}"))?);

    karniz_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| karniz_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
