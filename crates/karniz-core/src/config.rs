use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

/// Typed process configuration.
///
/// The bot needs exactly one secret: the Telegram token. It can come from
/// the environment or from a local `.env` file next to the binary; the
/// environment always wins.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = env_str("BOT_TOKEN").unwrap_or_default();
        if bot_token.trim().is_empty() {
            return Err(Error::Config(
                "BOT_TOKEN is not set. Export it as an environment variable \
                 or put BOT_TOKEN=... into a .env file next to the binary."
                    .to_string(),
            ));
        }

        Ok(Self { bot_token })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };
    tracing::debug!("loading environment overrides from {}", path.display());

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}
