//! Catalog page scraping and image download

mod extract;
mod normalize;

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, HttpFailure, Result};
use crate::models::Item;

pub use extract::extract_first_item;
pub use normalize::normalize_image_url;

const PAGE_TIMEOUT: Duration = Duration::from_secs(15);
const IMAGE_TIMEOUT: Duration = Duration::from_secs(20);

pub struct Scraper {
    client: Client,
}

impl Scraper {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36")
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { client })
    }

    /// Fetches `page_url` and returns its first item with an absolute image URL.
    pub async fn first_item(&self, page_url: &Url) -> Result<Item> {
        info!("Fetching catalog page {}", page_url);

        let html = self.fetch_page(page_url).await?;
        let mut item = extract_first_item(&html)?;

        debug!("Raw image reference: {}", item.image_url);
        item.image_url = normalize_image_url(&item.image_url, page_url)?;

        Ok(item)
    }

    pub async fn fetch_page(&self, page_url: &Url) -> Result<String> {
        let fetch = async {
            let response = self.get(page_url.as_str(), PAGE_TIMEOUT).await?;
            Ok::<_, HttpFailure>(response.text().await?)
        };

        fetch.await.map_err(|source| Error::Fetch {
            url: page_url.to_string(),
            source,
        })
    }

    /// Downloads the image body as-is; no decoding or size check.
    pub async fn download_image(&self, image_url: &str) -> Result<Vec<u8>> {
        info!("Downloading image {}", image_url);

        let download = async {
            let response = self.get(image_url, IMAGE_TIMEOUT).await?;
            Ok::<_, HttpFailure>(response.bytes().await?.to_vec())
        };

        let bytes = download.await.map_err(|source| Error::Download {
            url: image_url.to_string(),
            source,
        })?;

        debug!("Downloaded {} bytes", bytes.len());
        Ok(bytes)
    }

    async fn get(&self, url: &str, timeout: Duration) -> std::result::Result<Response, HttpFailure> {
        let response = self.client.get(url).timeout(timeout).send().await?;

        if !response.status().is_success() {
            return Err(HttpFailure::Status(response.status()));
        }

        Ok(response)
    }
}
