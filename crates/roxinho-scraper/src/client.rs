//! HTTP client shared by every marketplace extractor.

use std::time::Duration;

use reqwest::Client;
use roxinho_core::AppConfig;
use serde::de::DeserializeOwned;

use crate::error::ScraperError;

/// Outbound HTTP for product extraction.
///
/// Holds two `reqwest` clients: one for storefront pages (browser
/// `User-Agent`, page timeout) and one for the Mercado Livre items API (its
/// own timeout). Both enforce a connect timeout. Nothing is retried: a failed
/// fetch is returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    pages: Client,
    api: Client,
    mercadolivre_api_base: String,
}

impl MarketplaceClient {
    /// Builds the client from the process configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let connect_timeout = Duration::from_secs(config.scraper_connect_timeout_secs);

        let pages = Client::builder()
            .timeout(Duration::from_secs(config.scraper_request_timeout_secs))
            .connect_timeout(connect_timeout)
            .user_agent(config.scraper_user_agent.as_str())
            .build()?;

        let api = Client::builder()
            .timeout(Duration::from_secs(config.mercadolivre_timeout_secs))
            .connect_timeout(connect_timeout)
            .user_agent(config.scraper_user_agent.as_str())
            .build()?;

        Ok(Self {
            pages,
            api,
            mercadolivre_api_base: config.mercadolivre_api_base.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches a storefront page and returns its body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`]: `url` is not an absolute URL.
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx response.
    /// - [`ScraperError::Http`]: network, TLS, or timeout failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let response = self
            .pages
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches a Mercado Livre item from the public items API.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::ItemNotFound`]: any non-2xx response.
    /// - [`ScraperError::Http`]: network, TLS, or timeout failure.
    /// - [`ScraperError::Deserialize`]: body does not match `T`.
    pub async fn fetch_mercadolivre_item<T: DeserializeOwned>(
        &self,
        item_id: &str,
    ) -> Result<T, ScraperError> {
        let url = self.mercadolivre_item_url(item_id);

        let response = self
            .api
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::ItemNotFound {
                item_id: item_id.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("Mercado Livre item {item_id}"),
            source: e,
        })
    }

    fn mercadolivre_item_url(&self, item_id: &str) -> String {
        format!("{}/items/{item_id}", self.mercadolivre_api_base)
    }
}
