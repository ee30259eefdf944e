//! Search-and-scrape lyrics lookup
//!
//! This module provides:
//! - Search URL building and result-link extraction
//! - Lyric container extraction from song pages
//! - Cleanup of section labels and page metadata

pub mod clean;
pub mod extract;
pub mod html;
pub mod search;

use crate::config::{Config, SelectorConfig};
use crate::web::PageFetcher;
use anyhow::Context;
use scraper::Selector;
use std::fmt;
use tracing::{debug, info};

/// Compiled selectors for the two pages the lookup touches.
#[derive(Debug, Clone)]
pub struct PageParser {
    song_link: Selector,
    lyrics_container: Selector,
}

impl PageParser {
    pub fn new(cfg: &SelectorConfig) -> anyhow::Result<Self> {
        Ok(Self {
            song_link: html::compile_selector(&cfg.song_link).context("selectors.song_link")?,
            lyrics_container: html::compile_selector(&cfg.lyrics_container)
                .context("selectors.lyrics_container")?,
        })
    }

    pub fn first_song_href(&self, html: &str) -> Option<String> {
        search::first_song_href(html, &self.song_link)
    }

    pub fn raw_lyrics(&self, html: &str) -> Option<String> {
        extract::raw_lyrics(html, &self.lyrics_container)
    }
}

/// Progress of a single lookup, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SearchRequested,
    LinkExtracted,
    LyricsRequested,
    LyricsExtracted,
    Cleaned,
    Printed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SearchRequested => "search requested",
            Self::LinkExtracted => "link extracted",
            Self::LyricsRequested => "lyrics requested",
            Self::LyricsExtracted => "lyrics extracted",
            Self::Cleaned => "cleaned",
            Self::Printed => "printed",
        };
        f.write_str(name)
    }
}

/// Everything a lookup needs, built once per invocation.
pub struct Session<F> {
    fetcher: F,
    parser: PageParser,
    search_base: String,
}

impl<F: PageFetcher> Session<F> {
    pub fn new(cfg: &Config, fetcher: F) -> anyhow::Result<Self> {
        Ok(Self {
            fetcher,
            parser: PageParser::new(&cfg.selectors)?,
            search_base: cfg.search.base_url.clone(),
        })
    }

    /// Runs search, link extraction, song page fetch, extraction and cleanup.
    ///
    /// `Ok(None)` means the lookup found nothing; `Err` is a network failure.
    pub async fn fetch_lyrics(&self, query: &str) -> anyhow::Result<Option<String>> {
        let url = search::search_url(&self.search_base, query);
        debug!(stage = %Stage::SearchRequested, %url);
        let search_html = self
            .fetcher
            .fetch_page(&url)
            .await
            .context("search request")?;

        let Some(href) = self.parser.first_song_href(&search_html) else {
            info!("no song result for {query:?}");
            return Ok(None);
        };
        debug!(stage = %Stage::LinkExtracted, %href);

        let song_url = search::resolve_song_url(&url, &href)?;
        debug!(stage = %Stage::LyricsRequested, url = %song_url);
        let song_html = self
            .fetcher
            .fetch_page(&song_url)
            .await
            .context("song page request")?;

        let Some(raw) = self.parser.raw_lyrics(&song_html) else {
            info!("no lyrics containers on {song_url}");
            return Ok(None);
        };
        debug!(stage = %Stage::LyricsExtracted, bytes = raw.len());

        let lyrics = clean::clean_lyrics(&raw);
        debug!(stage = %Stage::Cleaned, lines = lyrics.lines().count());
        if lyrics.is_empty() {
            info!("lyrics empty after cleanup on {song_url}");
            return Ok(None);
        }
        Ok(Some(lyrics))
    }
}
