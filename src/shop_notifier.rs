use tracing::info;
use url::Url;

use crate::config::{CATEGORY_URL, Config};
use crate::error::{Error, Result};
use crate::models::RunReport;
use crate::scraper::Scraper;
use crate::telegram::TelegramNotifier;

/// Fetch, download and post the first catalog item, once.
pub struct ShopNotifier {
    scraper: Scraper,
    telegram: TelegramNotifier,
    page_url: Url,
}

impl ShopNotifier {
    pub fn new(config: &Config) -> Result<Self> {
        let page_url = parse_page_url(CATEGORY_URL)?;
        Ok(Self {
            scraper: Scraper::new()?,
            telegram: TelegramNotifier::new(config)?,
            page_url,
        })
    }

    /// Points the run at another catalog page and Bot API host.
    pub fn with_endpoints(config: &Config, page_url: &str, api_base: &str) -> Result<Self> {
        Ok(Self {
            scraper: Scraper::new()?,
            telegram: TelegramNotifier::with_api_base(config, api_base)?,
            page_url: parse_page_url(page_url)?,
        })
    }

    /// Runs every stage in order. The first failure ends the run.
    pub async fn run(&self) -> Result<RunReport> {
        let item = self.scraper.first_item(&self.page_url).await?;
        info!("Found image: {}", item.image_url);
        info!("Caption: {}", item.caption);

        let image = self.scraper.download_image(&item.image_url).await?;
        let image_size = image.len();

        let telegram = self.telegram.send_photo(image, &item.caption).await?;

        Ok(RunReport {
            item,
            image_size,
            telegram,
        })
    }
}

fn parse_page_url(page_url: &str) -> Result<Url> {
    Url::parse(page_url).map_err(|source| Error::InvalidUrl {
        reference: page_url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_the_category_listing() {
        let config = Config {
            bot_token: "t".to_string(),
            chat_id: "1".to_string(),
        };
        let notifier = ShopNotifier::new(&config).unwrap();
        assert_eq!(notifier.page_url.as_str(), CATEGORY_URL);
    }

    #[test]
    fn malformed_page_url_is_rejected() {
        let config = Config {
            bot_token: "t".to_string(),
            chat_id: "1".to_string(),
        };
        let result = ShopNotifier::with_endpoints(&config, "not a url", "http://localhost");
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }
}
