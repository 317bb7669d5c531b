//! Best-effort extraction for any other storefront, driven by Open Graph,
//! Twitter card and schema.org microdata with a few class-name heuristics
//! at the end of each cascade.

use roxinho_core::RawProductFields;
use scraper::Html;

use crate::cascade::{absolutize_url, all_matches, first_match, non_empty, Probe};
use crate::client::MarketplaceClient;
use crate::error::ScraperError;
use crate::price::parse_price;

const NAME: &[Probe] = &[
    Probe::content(r#"meta[property="og:title"]"#),
    Probe::content(r#"meta[name="twitter:title"]"#),
    Probe::content_or_text(r#"[itemprop="name"]"#),
    Probe::text("h1"),
    Probe::text("title"),
];

const PRICE: &[Probe] = &[
    Probe::content(r#"meta[property="product:price:amount"]"#),
    Probe::content(r#"meta[property="og:price:amount"]"#),
    Probe::content_or_text(r#"[itemprop="price"]"#),
    Probe::text(r#"[class*="price"]"#),
];

const DESCRIPTION: &[Probe] = &[
    Probe::content(r#"meta[property="og:description"]"#),
    Probe::content(r#"meta[name="description"]"#),
    Probe::content_or_text(r#"[itemprop="description"]"#),
    Probe::text(r#"[class*="description"]"#),
];

const IMAGE: &[Probe] = &[
    Probe::content(r#"meta[property="og:image"]"#),
    Probe::content(r#"meta[name="twitter:image"]"#),
    Probe::src(r#"img[itemprop="image"]"#),
    Probe::content(r#"[itemprop="image"]"#),
    Probe::src(r#"img[class*="product"]"#),
];

const BRAND: &[Probe] = &[
    Probe::content(r#"meta[property="product:brand"]"#),
    Probe::content_or_text(r#"[itemprop="brand"]"#),
];

const GALLERY: &[Probe] = &[Probe::content(r#"meta[property="og:image"]"#)];

/// Fetches `url` and scrapes whatever product fields the page exposes.
///
/// # Errors
///
/// Returns the [`ScraperError`] from the page fetch.
pub async fn extract(
    client: &MarketplaceClient,
    url: &str,
) -> Result<RawProductFields, ScraperError> {
    let html = client.fetch_page(url).await?;
    Ok(parse_page(&html, url))
}

#[must_use]
pub fn parse_page(html: &str, page_url: &str) -> RawProductFields {
    let doc = Html::parse_document(html);
    let resolve = |raw: String| absolutize_url(page_url, &raw);

    let mut gallery: Vec<String> = Vec::new();
    for url in all_matches(&doc, GALLERY, resolve) {
        if !gallery.contains(&url) {
            gallery.push(url);
        }
    }

    RawProductFields {
        name: first_match(&doc, NAME, non_empty),
        price: first_match(&doc, PRICE, |raw| parse_price(&raw)),
        description: first_match(&doc, DESCRIPTION, non_empty),
        primary_image: first_match(&doc, IMAGE, resolve),
        gallery,
        brand: first_match(&doc, BRAND, non_empty),
        model: None,
        stock: None,
        source_product_id: None,
    }
}
