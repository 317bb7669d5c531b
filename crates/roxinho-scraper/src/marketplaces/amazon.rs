//! Amazon product pages, scraped with per-field selector cascades.

use roxinho_core::RawProductFields;
use scraper::{Html, Selector};

use crate::cascade::{absolutize_url, first_match, non_empty, Probe};
use crate::client::MarketplaceClient;
use crate::error::ScraperError;
use crate::platform::extract_asin;
use crate::price::parse_price;

const NAME: &[Probe] = &[
    Probe::text("#productTitle"),
    Probe::text("h1 span#title"),
    Probe::content(r#"meta[name="title"]"#),
    Probe::content(r#"meta[property="og:title"]"#),
];

const PRICE: &[Probe] = &[
    Probe::text("span.a-price span.a-offscreen"),
    Probe::text("#priceblock_ourprice"),
    Probe::text("#priceblock_dealprice"),
    Probe::text("#kindle-price"),
    Probe::text(".a-color-price"),
];

const DESCRIPTION: &[Probe] = &[
    Probe::text("#productDescription p"),
    Probe::text("#feature-bullets ul"),
    Probe::content(r#"meta[name="description"]"#),
    Probe::content(r#"meta[property="og:description"]"#),
];

const IMAGE: &[Probe] = &[
    Probe::src("#landingImage"),
    Probe::src("#imgTagWrapperId img"),
    Probe::content(r#"meta[property="og:image"]"#),
    Probe::content(r#"meta[name="twitter:image"]"#),
];

/// Fetches an Amazon product page and scrapes raw fields from it.
///
/// # Errors
///
/// Returns the [`ScraperError`] from the page fetch (non-2xx status,
/// timeout, transport failure). Parsing itself never fails.
pub async fn extract(
    client: &MarketplaceClient,
    url: &str,
) -> Result<RawProductFields, ScraperError> {
    let html = client.fetch_page(url).await?;
    Ok(parse_page(&html, url))
}

/// Scrapes raw fields out of an Amazon product page.
#[must_use]
pub fn parse_page(html: &str, page_url: &str) -> RawProductFields {
    let doc = Html::parse_document(html);

    let primary_image = first_match(&doc, IMAGE, |raw| absolutize_url(page_url, &raw));
    let gallery = gallery(&doc, page_url, primary_image.as_deref());

    RawProductFields {
        name: first_match(&doc, NAME, non_empty),
        price: first_match(&doc, PRICE, |raw| parse_price(&raw)),
        description: first_match(&doc, DESCRIPTION, non_empty),
        primary_image,
        gallery,
        brand: None,
        model: None,
        stock: None,
        source_product_id: extract_asin(page_url),
    }
}

/// Primary image first, then the high-resolution variants Amazon lists on
/// the landing image (`data-old-hires`, keys of `data-a-dynamic-image`).
fn gallery(doc: &Html, page_url: &str, primary: Option<&str>) -> Vec<String> {
    let mut urls: Vec<String> = primary.map(str::to_owned).into_iter().collect();

    let Ok(selector) = Selector::parse("#landingImage") else {
        return urls;
    };
    let Some(landing) = doc.select(&selector).next() else {
        return urls;
    };

    let mut candidates: Vec<String> = Vec::new();
    if let Some(hires) = landing.value().attr("data-old-hires") {
        candidates.push(hires.to_owned());
    }
    if let Some(dynamic) = landing.value().attr("data-a-dynamic-image") {
        match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(dynamic) {
            Ok(map) => candidates.extend(map.into_iter().map(|(url, _)| url)),
            Err(e) => tracing::debug!(error = %e, "ignoring malformed data-a-dynamic-image"),
        }
    }

    for candidate in candidates {
        if let Some(url) = absolutize_url(page_url, &candidate) {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
    }
    urls
}
