//! # Telegram Bot API Integration
//!
//! Posts the scraped item image to a chat through the Bot API's `sendPhoto`
//! method. The photo travels as a multipart upload, so the chat sees the same
//! bytes that were downloaded from the shop rather than a link Telegram would
//! have to fetch itself.
//!
//! ## Request
//!
//! `POST {api_base}/bot{token}/sendPhoto` with the multipart fields:
//! - `chat_id`: destination user, group (negative id) or channel
//! - `caption`: the item caption, possibly empty
//! - `photo`: the image bytes, sent as `image.jpg`
//!
//! ## Response
//!
//! The JSON body is returned untouched. Telegram reports logical failures
//! such as an unknown chat as `{"ok": false, "description": ...}` with a
//! non-2xx status, which surfaces as an error here; a 2xx body with
//! `ok: false` is only logged.

use std::time::Duration;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::{Config, TELEGRAM_API_BASE};
use crate::error::{Error, HttpFailure, Result};

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the `sendPhoto` method of a single bot and chat.
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier talking to the public Bot API.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_api_base(config, TELEGRAM_API_BASE)
    }

    /// Creates a notifier against another Bot API host, e.g. a local server.
    pub fn with_api_base(config: &Config, api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build().map_err(Error::HttpClient)?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    /// Sends `image` with `caption` and returns the parsed API response.
    ///
    /// Non-2xx statuses, transport failures and non-JSON bodies are
    /// [`Error::Notify`]. None of them include the request URL, which holds
    /// the bot token.
    pub async fn send_photo(&self, image: Vec<u8>, caption: &str) -> Result<Value> {
        let photo = Part::bytes(image).file_name("image.jpg");

        let form = Form::new()
            .text("chat_id", self.chat_id.clone())
            .text("caption", caption.to_string())
            .part("photo", photo);

        let url = format!("{}/bot{}/sendPhoto", self.api_base, self.bot_token);

        let send = async {
            let response = self
                .client
                .post(url)
                .multipart(form)
                .timeout(SEND_TIMEOUT)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(HttpFailure::Status(status));
            }

            Ok::<_, HttpFailure>(response.json::<Value>().await?)
        };

        let body = send
            .await
            .map_err(|failure| Error::Notify(redact(failure)))?;

        if body.get("ok").and_then(Value::as_bool) == Some(true) {
            info!("Photo sent to chat {}", self.chat_id);
        } else {
            let description = body
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("no description");
            warn!(
                "Telegram did not confirm the photo for chat {}: {}",
                self.chat_id, description
            );
        }

        Ok(body)
    }
}

fn redact(failure: HttpFailure) -> HttpFailure {
    match failure {
        HttpFailure::Transport(err) => HttpFailure::Transport(err.without_url()),
        status => status,
    }
}
