//! Command handlers for `extract` and `classify`.

use roxinho_core::AppConfig;
use roxinho_scraper::{classify, ProductExtractor};

/// Runs the extraction pipeline for `url` and prints
/// `{ "platform": ..., "product": ... }` to stdout.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or extraction fails.
pub(crate) async fn run_extract(config: &AppConfig, url: &str) -> anyhow::Result<()> {
    let extractor = ProductExtractor::new(config)?;

    let extracted = extractor.extract_product(Some(url)).await.map_err(|e| {
        tracing::error!(url, status = ?e.status(), error = %e, "extraction failed");
        e
    })?;

    let output = serde_json::json!({
        "platform": extracted.platform.response_tag(),
        "product": extracted.product,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// One-line summary such as `2 perifericos (Periféricos)`.
pub(crate) fn describe_category(name: &str) -> String {
    let category = classify(name);
    format!(
        "{} {} ({})",
        category.id(),
        category.slug(),
        category.display_name()
    )
}
