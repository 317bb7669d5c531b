//! Mercado Livre items API response types (`GET /items/{MLB id}`).
//!
//! ## Observed shape
//!
//! ### `price`
//! A JSON number (`199.9`), occasionally `null` on paused listings. Parsed
//! straight into a `Decimal` so cents are not rounded through `f64`.
//!
//! ### Description
//! The item payload rarely carries the long description; `plain_text` is
//! usually absent and `subtitle` is `null` on most listings. Both are read
//! best-effort.
//!
//! ### Images
//! `thumbnail` is a small `http://` image; `pictures` holds the full gallery
//! with both `url` and `secure_url`. `pictures` may be `null` or absent.
//!
//! ### Attributes
//! A list of `{ id, value_name }` pairs. `BRAND` and `MODEL` are the only
//! ids read; either field may be `null`.
//!
//! ### Null list entries
//! `pictures` and `attributes` occasionally contain bare `null` entries;
//! they are skipped.
//!
//! Every field is optional so a sparse listing degrades to defaults instead
//! of failing deserialization.

use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct MercadoLivreItem {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub price: Option<Decimal>,

    #[serde(default)]
    pub plain_text: Option<String>,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub secure_thumbnail: Option<String>,

    #[serde(default)]
    pub pictures: Option<Vec<Option<MercadoLivrePicture>>>,

    #[serde(default)]
    pub attributes: Option<Vec<Option<MercadoLivreAttribute>>>,

    #[serde(default)]
    pub available_quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MercadoLivrePicture {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub secure_url: Option<String>,
}

impl MercadoLivrePicture {
    /// The picture URL, preferring the plain `url` the storefront has always
    /// stored and falling back to `secure_url`.
    #[must_use]
    pub fn best_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .or_else(|| self.secure_url.as_deref().filter(|u| !u.trim().is_empty()))
    }
}

#[derive(Debug, Deserialize)]
pub struct MercadoLivreAttribute {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub value_name: Option<String>,
}

impl MercadoLivreItem {
    /// Gallery pictures, skipping `null` entries.
    pub fn pictures(&self) -> impl Iterator<Item = &MercadoLivrePicture> {
        self.pictures.iter().flatten().flatten()
    }

    /// `value_name` of the first attribute whose id equals `attribute_id`.
    #[must_use]
    pub fn attribute(&self, attribute_id: &str) -> Option<&str> {
        self.attributes
            .as_deref()?
            .iter()
            .flatten()
            .find(|a| a.id.as_deref() == Some(attribute_id))
            .and_then(|a| a.value_name.as_deref())
            .filter(|v| !v.trim().is_empty())
    }
}
