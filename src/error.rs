//! Error types for the notifier pipeline.
//!
//! Every variant is terminal for a run. The entry point converts them into a
//! process exit code with [`Error::exit_code`].

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why an HTTP exchange did not produce a usable response.
#[derive(Debug, Error)]
pub enum HttpFailure {
    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    /// One or both credentials are missing from the environment.
    #[error(
        "Please set TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID environment variables (missing: {})",
        .missing.join(", ")
    )]
    Config { missing: Vec<&'static str> },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to fetch page {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: HttpFailure,
    },

    /// The page was fetched but its markup lacks what we need.
    #[error("{0} found on the page")]
    NotFound(&'static str),

    #[error("cannot resolve image reference {reference:?}: {source}")]
    InvalidUrl {
        reference: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to download image {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: HttpFailure,
    },

    /// The Telegram URL embeds the bot token, so it is never part of the message.
    #[error("failed to send photo to Telegram: {0}")]
    Notify(#[source] HttpFailure),
}

impl Error {
    /// Process exit code for this failure: 2 for configuration, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BOT_TOKEN_VAR;

    #[test]
    fn config_errors_exit_with_two() {
        let err = Error::Config {
            missing: vec![BOT_TOKEN_VAR],
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
        assert!(err.to_string().contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn runtime_errors_exit_with_one() {
        let errors = [
            Error::NotFound("no item container"),
            Error::Fetch {
                url: "https://example.com".to_string(),
                source: HttpFailure::Status(StatusCode::NOT_FOUND),
            },
            Error::Download {
                url: "https://example.com/a.jpg".to_string(),
                source: HttpFailure::Status(StatusCode::BAD_GATEWAY),
            },
            Error::Notify(HttpFailure::Status(StatusCode::UNAUTHORIZED)),
        ];

        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn status_failures_name_the_status() {
        let err = Error::Fetch {
            url: "https://example.com/category/426".to_string(),
            source: HttpFailure::Status(StatusCode::SERVICE_UNAVAILABLE),
        };
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("https://example.com/category/426"));
    }
}
