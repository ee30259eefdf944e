//! Search URL construction and result-link extraction.

use super::html::Document;
use anyhow::Context;
use reqwest::Url;
use scraper::Selector;

/// Builds `<base>?q=<query>` with the query percent-encoded.
pub fn search_url(base: &str, query: &str) -> String {
    format!("{}?q={}", base, urlencoding::encode(query))
}

/// `href` of the first element matching `selector`, if any.
pub fn first_song_href(html: &str, selector: &Selector) -> Option<String> {
    let doc = Document::parse(html);
    let first = doc.select(selector).into_iter().next()?;
    first.value().attr("href").map(str::to_string)
}

/// Resolves a result link against the search page it came from.
pub fn resolve_song_url(search_url: &str, href: &str) -> anyhow::Result<String> {
    let base = Url::parse(search_url).with_context(|| format!("parse search url {search_url}"))?;
    let url = base
        .join(href)
        .with_context(|| format!("resolve song link {href}"))?;
    Ok(url.to_string())
}
