//! Ordered selector cascades for pulling a field out of an HTML page.
//!
//! A cascade is a list of [`Probe`]s tried in order. Each probe pairs a CSS
//! selector with a function that reads a raw value from a matched element;
//! the first value the caller's `accept` function turns into `Some` wins and
//! the remaining probes are never evaluated.

use scraper::{ElementRef, Html, Selector};

/// Reads a raw string from a matched element.
pub type ReadValue = fn(ElementRef<'_>) -> Option<String>;

#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub selector: &'static str,
    pub read: ReadValue,
}

impl Probe {
    /// Probe reading the element's text content.
    #[must_use]
    pub const fn text(selector: &'static str) -> Self {
        Self {
            selector,
            read: read_text,
        }
    }

    /// Probe reading the `content` attribute (meta tags).
    #[must_use]
    pub const fn content(selector: &'static str) -> Self {
        Self {
            selector,
            read: read_content,
        }
    }

    /// Probe reading the `src` attribute (images).
    #[must_use]
    pub const fn src(selector: &'static str) -> Self {
        Self {
            selector,
            read: read_src,
        }
    }

    /// Probe preferring the `content` attribute and falling back to text,
    /// for microdata like `<span itemprop="price" content="59.90">`.
    #[must_use]
    pub const fn content_or_text(selector: &'static str) -> Self {
        Self {
            selector,
            read: read_content_or_text,
        }
    }
}

/// Runs `probes` in order over `doc` and returns the first accepted value.
///
/// Every element matched by a probe is offered to `accept` before moving on
/// to the next probe. Selectors that fail to parse are skipped.
pub fn first_match<T, F>(doc: &Html, probes: &[Probe], accept: F) -> Option<T>
where
    F: Fn(String) -> Option<T>,
{
    probes.iter().find_map(|probe| {
        let selector = parse_selector(probe.selector)?;
        let found = doc
            .select(&selector)
            .filter_map(probe.read)
            .find_map(&accept);
        found
    })
}

/// Collects every accepted value from every probe, in cascade order.
pub fn all_matches<T, F>(doc: &Html, probes: &[Probe], accept: F) -> Vec<T>
where
    F: Fn(String) -> Option<T>,
{
    probes
        .iter()
        .filter_map(|probe| parse_selector(probe.selector).map(|s| (probe, s)))
        .flat_map(|(probe, selector)| {
            let values: Vec<T> = doc
                .select(&selector)
                .filter_map(probe.read)
                .filter_map(&accept)
                .collect();
            values
        })
        .collect()
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!(selector, error = ?e, "skipping unparsable selector");
            None
        }
    }
}

/// Collapses runs of whitespace to single spaces and trims the ends.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Accepts a non-empty, whitespace-collapsed string.
#[must_use]
pub fn non_empty(raw: String) -> Option<String> {
    let cleaned = clean_text(&raw);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Resolves an image reference against the page it was found on.
///
/// Inline `data:` URIs are rejected: marketplaces use them as lazy-load
/// placeholders, never as the real picture.
#[must_use]
pub fn absolutize_url(base_url: &str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with("data:") {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(trimmed.to_string());
    }
    let base = reqwest::Url::parse(base_url).ok()?;
    let joined = base.join(trimmed).ok()?;
    matches!(joined.scheme(), "http" | "https").then(|| joined.to_string())
}

fn read_text(element: ElementRef<'_>) -> Option<String> {
    Some(element.text().collect::<String>())
}

fn read_content(element: ElementRef<'_>) -> Option<String> {
    element.value().attr("content").map(str::to_owned)
}

fn read_src(element: ElementRef<'_>) -> Option<String> {
    element.value().attr("src").map(str::to_owned)
}

fn read_content_or_text(element: ElementRef<'_>) -> Option<String> {
    read_content(element)
        .filter(|c| !c.trim().is_empty())
        .or_else(|| read_text(element))
}
