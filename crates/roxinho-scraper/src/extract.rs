//! Extraction orchestrator: URL in, canonical record out.
//!
//! One linear pass per call, no retries and no caching:
//! `Received → Detecting → Extracting → Classifying → Normalizing → Done`.

use roxinho_core::{AppConfig, Platform, ProductRecord, RawProductFields};

use crate::classify::classify;
use crate::client::MarketplaceClient;
use crate::error::ScraperError;
use crate::marketplaces::{amazon, generic, mercadolivre};
use crate::normalize::normalize_product;
use crate::platform::detect_platform;

/// Successful extraction: the record plus the platform it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedProduct {
    pub product: ProductRecord,
    pub platform: Platform,
}

/// Stateless orchestrator. Cloning shares the underlying connection pools;
/// concurrent calls never observe each other.
#[derive(Debug, Clone)]
pub struct ProductExtractor {
    client: MarketplaceClient,
}

impl ProductExtractor {
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        Ok(Self::with_client(MarketplaceClient::new(config)?))
    }

    #[must_use]
    pub fn with_client(client: MarketplaceClient) -> Self {
        Self { client }
    }

    /// Runs the full pipeline for `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::MissingUrl`]: `url` absent or blank; nothing is fetched.
    /// - [`ScraperError::UnsupportedPlatform`]: not a scrapable URL, or a
    ///   generic page where nothing product-like was found.
    /// - any extraction failure from the platform extractor.
    pub async fn extract_product(
        &self,
        url: Option<&str>,
    ) -> Result<ExtractedProduct, ScraperError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ScraperError::MissingUrl)?;

        let platform = detect_platform(url)?;
        tracing::info!(url, platform = %platform, "extracting product");

        let raw = self.extract_raw(platform, url).await?;

        let category = classify(raw.name.as_deref().unwrap_or_default());
        let product = normalize_product(raw, platform, url, category);

        tracing::debug!(
            url,
            platform = %platform,
            category = %category,
            name = %product.name,
            "product extracted"
        );

        Ok(ExtractedProduct { product, platform })
    }

    async fn extract_raw(
        &self,
        platform: Platform,
        url: &str,
    ) -> Result<RawProductFields, ScraperError> {
        match platform {
            Platform::MercadoLivre => mercadolivre::extract(&self.client, url).await,
            Platform::Amazon => amazon::extract(&self.client, url).await,
            Platform::Generic => {
                let raw = generic::extract(&self.client, url).await?;
                if raw.is_empty() {
                    return Err(ScraperError::UnsupportedPlatform {
                        url: url.to_owned(),
                    });
                }
                Ok(raw)
            }
        }
    }
}
