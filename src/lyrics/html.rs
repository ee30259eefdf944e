//! Thin wrapper over `scraper` for selecting elements out of a page.

use scraper::{ElementRef, Html, Node, Selector};

/// Parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.html.select(selector).collect()
    }
}

pub fn compile_selector(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("invalid selector {css:?}: {e}"))
}

/// Text content of `element` with every `<br>` turned into a newline.
pub fn text_with_breaks(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_keeps_document_order() {
        let doc = Document::parse(r#"<p class="x">one</p><div><p class="x">two</p></div><p>three</p>"#);
        let sel = compile_selector("p.x").unwrap();
        let texts: Vec<String> = doc
            .select(&sel)
            .into_iter()
            .map(|e| e.text().collect())
            .collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_text_with_breaks_nested() {
        let doc = Document::parse("<div id=\"c\">a<br>b <i>c<br/>d</i><a href=\"#\">e</a></div>");
        let sel = compile_selector("#c").unwrap();
        let el = doc.select(&sel)[0];
        assert_eq!(text_with_breaks(el), "a\nb c\nde");
    }

    #[test]
    fn test_bad_selector() {
        assert!(compile_selector("a[class^=").is_err());
    }
}
