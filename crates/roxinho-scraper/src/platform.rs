//! Platform detection and listing-identifier parsing for product URLs.

use std::sync::LazyLock;

use regex::Regex;
use roxinho_core::Platform;

use crate::error::ScraperError;

const MERCADOLIVRE_HOSTS: &[&str] = &["mercadolivre.com.br", "mercadolibre.com"];
const AMAZON_HOSTS: &[&str] = &["amazon.com.br", "amazon.com"];

static MLB_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)MLB-?(\d+)").expect("valid regex"));
static ASIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/(?:dp|gp/product)/([A-Z0-9]{10})(?:[/?#]|$)").expect("valid regex")
});

/// Classifies `url` by the marketplace it points at.
///
/// Known marketplaces are matched by substring on the raw input, so a
/// scheme-less `"produto.mercadolivre.com.br/MLB-1"` still resolves. Anything
/// else falls back to [`Platform::Generic`] as long as it is an absolute
/// `http(s)` URL with a host.
///
/// # Errors
///
/// Returns [`ScraperError::UnsupportedPlatform`] when the input is neither a
/// known marketplace nor a scrapable URL.
pub fn detect_platform(url: &str) -> Result<Platform, ScraperError> {
    let lower = url.trim().to_ascii_lowercase();

    if MERCADOLIVRE_HOSTS.iter().any(|host| lower.contains(host)) {
        return Ok(Platform::MercadoLivre);
    }
    if AMAZON_HOSTS.iter().any(|host| lower.contains(host)) {
        return Ok(Platform::Amazon);
    }
    if is_scrapable_url(url.trim()) {
        return Ok(Platform::Generic);
    }

    Err(ScraperError::UnsupportedPlatform {
        url: url.to_owned(),
    })
}

fn is_scrapable_url(url: &str) -> bool {
    reqwest::Url::parse(url).is_ok_and(|u| {
        matches!(u.scheme(), "http" | "https") && u.host_str().is_some_and(|h| !h.is_empty())
    })
}

/// Extracts the Mercado Livre listing id (`MLB` + digits) from a URL,
/// normalized to upper case without the optional hyphen.
#[must_use]
pub fn extract_mlb_id(url: &str) -> Option<String> {
    MLB_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|digits| format!("MLB{}", digits.as_str()))
}

/// Extracts the ASIN from `/dp/<ASIN>` or `/gp/product/<ASIN>` paths.
#[must_use]
pub fn extract_asin(url: &str) -> Option<String> {
    ASIN_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|asin| asin.as_str().to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_mercadolivre_domains() {
        for url in [
            "https://produto.mercadolivre.com.br/MLB-1234567890-teclado-mecanico-_JM",
            "https://www.mercadolivre.com.br/p/MLB19797233",
            "https://articulo.mercadolibre.com.ar/MLA-123",
            "produto.mercadolivre.com.br/MLB-1",
        ] {
            assert_eq!(detect_platform(url).unwrap(), Platform::MercadoLivre, "{url}");
        }
    }

    #[test]
    fn detects_amazon_domains() {
        for url in [
            "https://www.amazon.com.br/dp/B0BZ4QK6XK",
            "https://www.amazon.com/Some-Product/dp/B08N5WRWNW/ref=sr_1_1",
            "https://WWW.AMAZON.COM.BR/gp/product/B0BZ4QK6XK",
        ] {
            assert_eq!(detect_platform(url).unwrap(), Platform::Amazon, "{url}");
        }
    }

    #[test]
    fn other_http_urls_are_generic() {
        for url in [
            "https://www.kabum.com.br/produto/12345/mouse-gamer",
            "http://loja.example.com/item?id=9",
            "  https://pichau.com.br/headset  ",
        ] {
            assert_eq!(detect_platform(url).unwrap(), Platform::Generic, "{url}");
        }
    }

    #[test]
    fn non_urls_are_unsupported() {
        for url in ["not a url", "ftp://files.example.com/x", "kabum.com.br/produto", ""] {
            let err = detect_platform(url).unwrap_err();
            assert!(
                matches!(err, ScraperError::UnsupportedPlatform { .. }),
                "{url}: {err:?}"
            );
        }
    }

    #[test]
    fn mlb_id_with_and_without_hyphen() {
        assert_eq!(
            extract_mlb_id("https://produto.mercadolivre.com.br/MLB-1234567890-teclado-_JM"),
            Some("MLB1234567890".to_string())
        );
        assert_eq!(
            extract_mlb_id("https://www.mercadolivre.com.br/p/MLB19797233"),
            Some("MLB19797233".to_string())
        );
        assert_eq!(
            extract_mlb_id("https://produto.mercadolivre.com.br/mlb-42-x"),
            Some("MLB42".to_string())
        );
    }

    #[test]
    fn mlb_id_missing() {
        assert_eq!(extract_mlb_id("https://www.mercadolivre.com.br/ofertas"), None);
    }

    #[test]
    fn asin_from_dp_and_gp_paths() {
        assert_eq!(
            extract_asin("https://www.amazon.com.br/Mouse-Gamer/dp/B0BZ4QK6XK/ref=sr_1_1"),
            Some("B0BZ4QK6XK".to_string())
        );
        assert_eq!(
            extract_asin("https://www.amazon.com/gp/product/b08n5wrwnw?psc=1"),
            Some("B08N5WRWNW".to_string())
        );
        assert_eq!(extract_asin("https://www.amazon.com.br/s?k=mouse"), None);
    }
}
