use super::html::{Document, text_with_breaks};
use scraper::Selector;

/// Text of every lyric container on the page, joined by newlines.
///
/// Returns `None` when the page has no containers at all.
pub fn raw_lyrics(html: &str, container: &Selector) -> Option<String> {
    let doc = Document::parse(html);
    let blocks: Vec<String> = doc
        .select(container)
        .into_iter()
        .map(text_with_breaks)
        .collect();

    if blocks.is_empty() {
        return None;
    }
    Some(blocks.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::lyrics::html::compile_selector;

    fn container_selector() -> Selector {
        compile_selector(defaults::LYRICS_CONTAINER_SELECTOR).unwrap()
    }

    #[test]
    fn test_containers_joined_in_order() {
        let html = "<html><body>\
            <div data-lyrics-container=\"true\">Line one<br>Line two</div>\
            <div class=\"ad\">Buy now</div>\
            <div data-lyrics-container=\"true\">[Chorus]\nLine three</div>\
            </body></html>";
        assert_eq!(
            raw_lyrics(html, &container_selector()).as_deref(),
            Some("Line one\nLine two\n[Chorus]\nLine three")
        );
    }

    #[test]
    fn test_no_containers() {
        let html = "<html><body><div data-lyrics-container=\"false\">nope</div></body></html>";
        assert_eq!(raw_lyrics(html, &container_selector()), None);
    }

    #[test]
    fn test_inline_markup_is_flattened() {
        let html = "<div data-lyrics-container=\"true\">\
            <a href=\"/annotation\"><span>I'm in love</span></a> with the <b>shape</b> of you<br/>\
            We push and pull</div>";
        assert_eq!(
            raw_lyrics(html, &container_selector()).as_deref(),
            Some("I'm in love with the shape of you\nWe push and pull")
        );
    }

    #[test]
    fn test_empty_container_still_counts() {
        let html = "<div data-lyrics-container=\"true\"></div>";
        assert_eq!(raw_lyrics(html, &container_selector()).as_deref(), Some(""));
    }
}
