//! Thin query layer over a parsed record page.
//!
//! Every lookup returns `Option` so that a missing node is an ordinary branch
//! for the extractors rather than an error.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

pub struct RecordPage {
    html: Html,
}

impl RecordPage {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// First element matching `tag` in document order.
    pub fn first(&self, tag: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(tag).ok()?;
        self.html.select(&selector).next()
    }

    /// First `tag` element whose single string equals `text` exactly.
    pub fn find_by_text(&self, tag: &str, text: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(tag).ok()?;
        self.html
            .select(&selector)
            .find(|element| element_string(*element) == Some(text))
    }

    /// First `tag` element carrying `class` among its classes.
    pub fn find_by_class(&self, tag: &str, class: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(&format!("{}.{}", tag, class)).ok()?;
        self.html.select(&selector).next()
    }
}

/// The text of an element that holds exactly one child, following single
/// children down to a text node. `<dt><b>Age:</b></dt>` yields `"Age:"`;
/// an element with several children or none yields `None`.
pub fn element_string<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    let mut children = element.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match only.value() {
        Node::Text(text) => Some(&**text),
        Node::Element(_) => ElementRef::wrap(only).and_then(element_string),
        _ => None,
    }
}

/// Next sibling element named `tag`, skipping whitespace and other siblings.
pub fn next_sibling<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == tag)
}

pub fn first_descendant<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(tag).ok()?;
    element.select(&selector).next()
}

pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Trimmed text, or `None` when nothing but whitespace remains.
pub fn clean(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_text_requires_exact_string() {
        let page = RecordPage::parse(
            "<dl><dt>Rank</dt><dd>x</dd><dt>Rank:</dt><dd>Gunner</dd></dl>",
        );
        let label = page.find_by_text("dt", "Rank:").unwrap();
        let value = next_sibling(label, "dd").unwrap();
        assert_eq!(element_string(value), Some("Gunner"));

        assert!(page.find_by_text("dt", "rank:").is_none());
    }

    #[test]
    fn test_element_string_follows_single_child() {
        let page = RecordPage::parse("<dl><dt><strong>Age:</strong></dt><dd>24</dd></dl>");
        assert!(page.find_by_text("dt", "Age:").is_some());
    }

    #[test]
    fn test_element_string_is_none_for_mixed_content() {
        let page = RecordPage::parse("<p class=\"x\">Son of <b>Edward</b></p>");
        let p = page.find_by_class("p", "x").unwrap();
        assert_eq!(element_string(p), None);
    }

    #[test]
    fn test_next_sibling_skips_other_elements() {
        let page = RecordPage::parse(
            "<div><h3>Additional Information:</h3>\n<span>-</span>\n<p>Note</p></div>",
        );
        let heading = page.find_by_text("h3", "Additional Information:").unwrap();
        let p = next_sibling(heading, "p").unwrap();
        assert_eq!(element_string(p), Some("Note"));
        assert!(next_sibling(heading, "dd").is_none());
    }

    #[test]
    fn test_descendant_and_attr() {
        let page = RecordPage::parse(
            "<p class=\"readMore other\"><span><a href=\"/cemetery/1\">More</a></span></p>",
        );
        let marker = page.find_by_class("p", "readMore").unwrap();
        let link = first_descendant(marker, "a").unwrap();
        assert_eq!(attr(link, "href"), Some("/cemetery/1"));
        assert_eq!(attr(link, "title"), None);
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("  Gunner \n"), Some("Gunner".to_string()));
        assert_eq!(clean("\u{a0}"), None);
        assert_eq!(clean(""), None);
    }
}
