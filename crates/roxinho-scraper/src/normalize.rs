//! Normalization from [`RawProductFields`] to [`ProductRecord`].
//!
//! Every default-substitution rule lives here so extractors can report
//! exactly what they saw.

use roxinho_core::products::DEFAULT_DESCRIPTION;
use roxinho_core::{Category, Platform, ProductRecord, RawProductFields};
use rust_decimal::Decimal;

/// Builds the canonical record for one extraction. Pure; never fails.
///
/// - blank or missing name → the platform's default name
/// - missing or negative price → `0`; `source_price` mirrors `price`
/// - missing description → [`DEFAULT_DESCRIPTION`]
/// - missing primary image → first gallery image → platform placeholder
/// - gallery: trimmed, blanks dropped, duplicates dropped (first wins)
/// - stock clamped into `0..=u32::MAX`, missing → `0`
#[must_use]
pub fn normalize_product(
    raw: RawProductFields,
    platform: Platform,
    source_url: &str,
    category: Category,
) -> ProductRecord {
    let image_gallery = normalize_gallery(raw.gallery);

    let name = non_blank(raw.name).unwrap_or_else(|| platform.default_name().to_string());
    let description =
        non_blank(raw.description).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
    let primary_image = non_blank(raw.primary_image)
        .or_else(|| image_gallery.first().cloned())
        .unwrap_or_else(|| platform.placeholder_image().to_string());

    let price = raw.price.unwrap_or(Decimal::ZERO).max(Decimal::ZERO);
    let stock_quantity = raw.stock.map_or(0, clamp_stock);

    ProductRecord {
        name,
        price,
        description,
        primary_image,
        image_gallery,
        brand: non_blank(raw.brand),
        model: non_blank(raw.model),
        stock_quantity,
        category_id: category,
        source_platform: platform,
        source_url: source_url.trim().to_string(),
        source_price: price,
        source_product_id: non_blank(raw.source_product_id),
        active: true,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_gallery(urls: Vec<String>) -> Vec<String> {
    let mut gallery: Vec<String> = Vec::with_capacity(urls.len());
    for url in urls {
        let url = url.trim();
        if !url.is_empty() && !gallery.iter().any(|seen| seen == url) {
            gallery.push(url.to_string());
        }
    }
    gallery
}

fn clamp_stock(stock: i64) -> u32 {
    u32::try_from(stock.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
