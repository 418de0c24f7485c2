//! Extraction of the first item container from a catalog page

use std::sync::LazyLock;

use regex_lite::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::models::Item;

/// Any element carrying an id; filtered against `ITEM_ID` afterwards.
static WITH_ID: LazyLock<Selector> = LazyLock::new(|| Selector::parse("[id]").unwrap());

static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

static CAPTION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dd").unwrap());

/// Item containers are ids like `item_12345`.
static ITEM_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^item_\d+").unwrap());

/// Returns the first item on the page with its raw image reference.
///
/// Fails with [`Error::NotFound`] when the page has no item container, or
/// when the container has no `<img>` with a non-blank `src`. A missing
/// `<dd>` only yields an empty caption.
pub fn extract_first_item(html: &str) -> Result<Item> {
    let document = Html::parse_document(html);

    let container = document
        .select(&WITH_ID)
        .find(|el| el.value().id().is_some_and(|id| ITEM_ID.is_match(id)))
        .ok_or(Error::NotFound("no item container"))?;

    let image_url = container
        .select(&IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .ok_or(Error::NotFound("no image"))?
        .to_string();

    let caption = container
        .select(&CAPTION)
        .next()
        .map(collapsed_text)
        .unwrap_or_default();

    Ok(Item { image_url, caption })
}

/// Visible text of an element with whitespace runs folded to one space.
fn collapsed_text(el: ElementRef<'_>) -> String {
    let text = el.text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
