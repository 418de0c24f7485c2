//! Data models for scraped shop items and run results

use serde::Serialize;
use serde_json::Value;

/// The first product listed on the catalog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Image reference; absolute once it leaves the scraper
    pub image_url: String,
    /// Text of the item's `<dd>`, empty when there is none
    pub caption: String,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub item: Item,
    pub image_size: usize,
    /// Telegram's `sendPhoto` response, untouched
    pub telegram: Value,
}

impl RunReport {
    /// The `ok` flag of the Telegram response, if it carried a boolean one.
    pub fn ok(&self) -> Option<bool> {
        self.telegram.get("ok").and_then(Value::as_bool)
    }
}
