//! shop-photo-notifier - posts the newest item of a shop catalog page to Telegram
//!
//! Fetches the catalog page, takes the first `item_<n>` container, downloads
//! its image and sends it with the item caption through the Bot API.

pub mod config;
pub mod error;
pub mod models;
pub mod scraper;
pub mod shop_notifier;
pub mod telegram;

pub use config::Config;
pub use error::{Error, HttpFailure, Result};
pub use models::{Item, RunReport};
pub use shop_notifier::ShopNotifier;
