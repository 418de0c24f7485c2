use url::Url;

use crate::error::{Error, Result};

/// Turns an image reference from `base`'s markup into an absolute URL.
///
/// Protocol-relative references get `https:`, site-relative ones are joined
/// onto `base`. Anything else is returned as-is.
pub fn normalize_image_url(reference: &str, base: &Url) -> Result<String> {
    if reference.starts_with("//") {
        Ok(format!("https:{reference}"))
    } else if reference.starts_with('/') {
        base.join(reference)
            .map(String::from)
            .map_err(|source| Error::InvalidUrl {
                reference: reference.to_string(),
                source,
            })
    } else {
        Ok(reference.to_string())
    }
}
