//! Mercado Livre extraction through the public items API.

use roxinho_core::RawProductFields;

use crate::client::MarketplaceClient;
use crate::error::ScraperError;
use crate::platform::extract_mlb_id;
use crate::types::{MercadoLivreItem, MercadoLivrePicture};

/// Fetches the listing referenced by `url` and maps it to raw fields.
///
/// # Errors
///
/// - [`ScraperError::ListingIdNotFound`]: no `MLB` id in the URL; the API
///   is not called.
/// - [`ScraperError::ItemNotFound`]: the API answered with a non-2xx status.
/// - [`ScraperError::Http`] / [`ScraperError::Deserialize`]: transport or
///   payload failure.
pub async fn extract(
    client: &MarketplaceClient,
    url: &str,
) -> Result<RawProductFields, ScraperError> {
    let item_id = extract_mlb_id(url).ok_or_else(|| ScraperError::ListingIdNotFound {
        url: url.to_owned(),
    })?;

    tracing::debug!(item_id = %item_id, "fetching Mercado Livre item");
    let item: MercadoLivreItem = client.fetch_mercadolivre_item(&item_id).await?;

    Ok(item_to_fields(item, item_id))
}

/// Maps an API payload onto raw fields. Missing values stay `None`.
#[must_use]
pub fn item_to_fields(item: MercadoLivreItem, item_id: String) -> RawProductFields {
    let description = non_blank(item.plain_text.as_deref())
        .or_else(|| non_blank(item.subtitle.as_deref()))
        .map(str::to_owned);

    let gallery: Vec<String> = item
        .pictures()
        .filter_map(MercadoLivrePicture::best_url)
        .map(str::to_owned)
        .collect();

    let primary_image = non_blank(item.thumbnail.as_deref())
        .map(str::to_owned)
        .or_else(|| gallery.first().cloned())
        .or_else(|| non_blank(item.secure_thumbnail.as_deref()).map(str::to_owned));

    RawProductFields {
        name: non_blank(item.title.as_deref()).map(str::to_owned),
        price: item.price,
        description,
        primary_image,
        brand: item.attribute("BRAND").map(str::to_owned),
        model: item.attribute("MODEL").map(str::to_owned),
        stock: item.available_quantity,
        source_product_id: Some(item.id.clone().unwrap_or(item_id)),
        gallery,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
