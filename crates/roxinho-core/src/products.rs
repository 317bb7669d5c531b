use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;

pub const DEFAULT_DESCRIPTION: &str = "Description unavailable.";

/// Where a product was pulled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(rename = "mercadolivre")]
    MercadoLivre,
    Amazon,
    Generic,
}

impl Platform {
    /// Tag returned alongside an extracted product in the HTTP response.
    ///
    /// The storefront front-end expects the Portuguese `"generico"` for the
    /// fallback scraper, while the stored record keeps `"generic"`.
    #[must_use]
    pub fn response_tag(self) -> &'static str {
        match self {
            Platform::MercadoLivre => "mercadolivre",
            Platform::Amazon => "amazon",
            Platform::Generic => "generico",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::MercadoLivre => "mercadolivre",
            Platform::Amazon => "amazon",
            Platform::Generic => "generic",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::MercadoLivre => "Mercado Livre",
            Platform::Amazon => "Amazon",
            Platform::Generic => "the source store",
        }
    }

    /// Name used when no title could be extracted.
    #[must_use]
    pub fn default_name(self) -> &'static str {
        match self {
            Platform::MercadoLivre => "Unknown Mercado Livre Product",
            Platform::Amazon => "Unknown Amazon Product",
            Platform::Generic => "Unknown Product",
        }
    }

    /// Image URL used when no picture could be extracted.
    #[must_use]
    pub fn placeholder_image(self) -> &'static str {
        match self {
            Platform::MercadoLivre => "https://via.placeholder.com/400?text=Mercado+Livre+Product",
            Platform::Amazon => "https://via.placeholder.com/400?text=Amazon+Product",
            Platform::Generic => "https://via.placeholder.com/400?text=Product",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields as an extractor found them, before defaults are applied.
///
/// Every field is optional: extractors report what they saw and leave the
/// substitution rules to the normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProductFields {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub primary_image: Option<String>,
    pub gallery: Vec<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// Signed because upstream APIs occasionally report negative stock.
    pub stock: Option<i64>,
    /// Listing identifier on the source platform (MLB id, ASIN).
    pub source_product_id: Option<String>,
}

impl RawProductFields {
    /// `true` when the extractor found nothing a product could be built from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.primary_image.is_none()
            && self.gallery.is_empty()
    }
}

/// Platform-agnostic product shape produced by the extraction pipeline,
/// ready to be inserted by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    /// Never negative; `0` when the source price could not be read.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub primary_image: String,
    pub image_gallery: Vec<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub stock_quantity: u32,
    pub category_id: Category,
    pub source_platform: Platform,
    pub source_url: String,
    /// Copy of `price` labelled with the platform it was quoted on.
    #[serde(with = "rust_decimal::serde::float")]
    pub source_price: Decimal,
    pub source_product_id: Option<String>,
    pub active: bool,
}

impl ProductRecord {
    /// Gallery encoded the way the storage column expects it (a JSON array).
    #[must_use]
    pub fn gallery_json(&self) -> String {
        serde_json::to_string(&self.image_gallery).unwrap_or_else(|_| "[]".to_string())
    }

    /// Human label for `source_price`, e.g. `"price at Amazon"`.
    #[must_use]
    pub fn source_price_label(&self) -> String {
        format!("price at {}", self.source_platform.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            name: "Teclado Mecânico".to_string(),
            price: Decimal::new(1999, 1),
            description: DEFAULT_DESCRIPTION.to_string(),
            primary_image: Platform::MercadoLivre.placeholder_image().to_string(),
            image_gallery: Vec::new(),
            brand: None,
            model: None,
            stock_quantity: 5,
            category_id: Category::Peripherals,
            source_platform: Platform::MercadoLivre,
            source_url: "https://produto.mercadolivre.com.br/MLB-1".to_string(),
            source_price: Decimal::new(1999, 1),
            source_product_id: Some("MLB1".to_string()),
            active: true,
        }
    }

    #[test]
    fn record_serializes_with_camel_case_keys_and_numeric_prices() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["name"], "Teclado Mecânico");
        assert_eq!(json["price"].as_f64(), Some(199.9));
        assert_eq!(json["sourcePrice"].as_f64(), Some(199.9));
        assert_eq!(json["stockQuantity"], 5);
        assert_eq!(json["categoryId"], 2);
        assert_eq!(json["sourcePlatform"], "mercadolivre");
        assert_eq!(json["imageGallery"], serde_json::json!([]));
        assert!(json["brand"].is_null());
        assert_eq!(json["active"], true);
    }

    #[test]
    fn empty_gallery_encodes_as_empty_array() {
        assert_eq!(record().gallery_json(), "[]");
    }

    #[test]
    fn gallery_json_keeps_order() {
        let mut r = record();
        r.image_gallery = vec!["https://a/1.jpg".into(), "https://a/2.jpg".into()];
        assert_eq!(r.gallery_json(), r#"["https://a/1.jpg","https://a/2.jpg"]"#);
    }

    #[test]
    fn platform_tags() {
        assert_eq!(Platform::Generic.as_str(), "generic");
        assert_eq!(Platform::Generic.response_tag(), "generico");
        assert_eq!(
            serde_json::to_string(&Platform::Generic).unwrap(),
            "\"generic\""
        );
        assert_eq!(record().source_price_label(), "price at Mercado Livre");
    }

    #[test]
    fn raw_fields_default_is_empty() {
        assert!(RawProductFields::default().is_empty());
        let raw = RawProductFields {
            brand: Some("Acme".into()),
            ..RawProductFields::default()
        };
        // Brand alone does not describe a product.
        assert!(raw.is_empty());
    }
}
