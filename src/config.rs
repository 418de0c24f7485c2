//! Run configuration read from the process environment.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the destination chat or channel id.
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Catalog page whose first item gets posted.
pub const CATEGORY_URL: &str = "https://www.nogizaka46shop.com/category/426";

/// Base URL of the Telegram Bot API.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Credentials for a single run.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    /// Numeric chat id; negative for groups.
    pub chat_id: String,
}

impl Config {
    /// Reads both credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// Empty values count as missing. The error lists every missing name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| lookup(key).filter(|value| !value.trim().is_empty());

        let bot_token = read(BOT_TOKEN_VAR);
        let chat_id = read(CHAT_ID_VAR);

        match (bot_token, chat_id) {
            (Some(bot_token), Some(chat_id)) => {
                debug!("Loaded Telegram credentials for chat {}", chat_id);
                Ok(Self { bot_token, chat_id })
            }
            (bot_token, chat_id) => {
                let missing = [(BOT_TOKEN_VAR, bot_token), (CHAT_ID_VAR, chat_id)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(name, _)| name)
                    .collect();
                Err(Error::Config { missing })
            }
        }
    }
}

// The token is a secret; keep it out of `{:?}` output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn missing_vars(result: Result<Config>) -> Vec<&'static str> {
        match result {
            Err(Error::Config { missing }) => missing,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn reads_both_credentials() {
        let config = Config::from_lookup(lookup(&[
            (BOT_TOKEN_VAR, "123:abc"),
            (CHAT_ID_VAR, "-1001234"),
        ]))
        .unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.chat_id, "-1001234");
    }

    #[test]
    fn missing_token_is_reported() {
        let missing = missing_vars(Config::from_lookup(lookup(&[(CHAT_ID_VAR, "42")])));
        assert_eq!(missing, vec![BOT_TOKEN_VAR]);
    }

    #[test]
    fn missing_chat_id_is_reported() {
        let missing = missing_vars(Config::from_lookup(lookup(&[(BOT_TOKEN_VAR, "t")])));
        assert_eq!(missing, vec![CHAT_ID_VAR]);
    }

    #[test]
    fn both_missing_are_reported() {
        let result = Config::from_lookup(lookup(&[]));
        assert_eq!(result.as_ref().unwrap_err().exit_code(), 2);
        assert_eq!(missing_vars(result), vec![BOT_TOKEN_VAR, CHAT_ID_VAR]);
    }

    #[test]
    fn empty_values_count_as_missing() {
        let missing = missing_vars(Config::from_lookup(lookup(&[
            (BOT_TOKEN_VAR, ""),
            (CHAT_ID_VAR, "  "),
        ])));
        assert_eq!(missing, vec![BOT_TOKEN_VAR, CHAT_ID_VAR]);
    }

    #[test]
    fn debug_output_hides_the_token() {
        let config = Config {
            bot_token: "123:secret".to_string(),
            chat_id: "42".to_string(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("42"));
    }
}
