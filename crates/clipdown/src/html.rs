//! HTML parsing support.
//!
//! This module parses HTML strings with scraper/html5ever and converts them
//! to the CDP-style [`Node`] structure. [`HtmlDocument`] additionally resolves
//! CSS selectors, standing in for the live page a content script would query.

use scraper::{ElementRef, Html, Node as ScraperNode, Selector};
use tracing::debug;

use crate::dom::DomProvider;
use crate::node::Node;
use crate::{ClipdownError, Result};

/// Parse an HTML fragment into a Node tree.
///
/// The returned root is the synthetic `<html>` element html5ever wraps
/// fragments in; it is an unrecognized tag and converts transparently.
///
/// # Example
///
/// ```rust
/// use clipdown::{parse_html, ClipdownService};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let service = ClipdownService::new();
/// let markdown = service.convert(&node).unwrap();
/// assert_eq!(markdown, "# Hello *World*");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// A parsed HTML document that answers CSS selector queries
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

impl DomProvider for HtmlDocument {
    type Node = Node;

    fn select_all(&self, selector: &str) -> Result<Vec<Node>> {
        let parsed = parse_selector(selector)?;
        let matches: Vec<Node> = self.html.select(&parsed).map(scraper_to_node).collect();
        debug!(selector, matches = matches.len(), "selector query");
        Ok(matches)
    }

    fn select_first(&self, selector: &str) -> Result<Option<Node>> {
        let parsed = parse_selector(selector)?;
        let first = self.html.select(&parsed).next().map(scraper_to_node);
        debug!(selector, found = first.is_some(), "selector query");
        Ok(first)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ClipdownError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    // Collect attributes
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    // Process children
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DomNode;
    use crate::{ClipdownService, ExtractRequest};

    #[test]
    fn test_parse_simple_html() {
        let node = parse_html("<p>Hello World</p>");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "html");
    }

    #[test]
    fn test_convert_html() {
        let service = ClipdownService::new();
        let result = service.convert_html("<p>Hello World</p>").unwrap();
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_end_to_end_scenario() {
        let service = ClipdownService::new();
        let result = service
            .convert_html(
                "<div><h1>Title</h1><p>Hello <strong>world</strong></p><ul><li>a</li><li>b</li></ul></div>",
            )
            .unwrap();
        assert_eq!(result, "# Title\n\nHello **world**\n\n- a\n- b");
    }

    #[test]
    fn test_link_fallback() {
        let service = ClipdownService::new();
        let result = service
            .convert_html(r#"<a href="https://x.test"></a>"#)
            .unwrap();
        assert_eq!(result, "[https://x.test](https://x.test)");
    }

    #[test]
    fn test_blockquote_paragraphs() {
        let service = ClipdownService::new();
        let result = service
            .convert_html("<blockquote><p>A</p><p>B</p></blockquote>")
            .unwrap();
        assert_eq!(result, "> A\n\n> B");
    }

    #[test]
    fn test_image_without_src() {
        let service = ClipdownService::new();
        assert_eq!(service.convert_html(r#"<img alt="x">"#).unwrap(), "");
    }

    #[test]
    fn test_table_with_implied_tbody() {
        let service = ClipdownService::new();
        let result = service
            .convert_html(
                "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td><b>2</b></td></tr></table>",
            )
            .unwrap();
        assert_eq!(result, "| A | B |\n| --- | --- |\n| 1 | **2** |");
    }

    #[test]
    fn test_ordered_list_with_source_whitespace() {
        let service = ClipdownService::new();
        let result = service
            .convert_html("<ol>\n<li>one</li>\n<li>two</li>\n<li>three</li>\n</ol>")
            .unwrap();
        assert!(result.contains("1. one"));
        assert!(result.contains("2. two"));
        assert!(result.contains("3. three"));
    }

    #[test]
    fn test_comments_are_skipped() {
        let service = ClipdownService::new();
        let result = service
            .convert_html("<p>kept<!-- hidden --> text</p>")
            .unwrap();
        assert_eq!(result, "kept text");
    }

    #[test]
    fn test_select_all_document_order() {
        let document = HtmlDocument::parse("<p class='x'>1</p><div><p class='x'>2</p></div>");
        let matches = document.select_all("p.x").unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].collect_text().unwrap(), "1");
        assert_eq!(matches[1].collect_text().unwrap(), "2");
    }

    #[test]
    fn test_invalid_selector() {
        let document = HtmlDocument::parse("<p>x</p>");
        let err = document.select_all("p[").unwrap_err();
        assert!(matches!(
            err,
            ClipdownError::InvalidSelector { ref selector, .. } if selector == "p["
        ));
        assert!(document.select_first("p[").is_err());
    }

    #[test]
    fn test_select_first_builds_only_the_outermost_match() {
        let depth = 200;
        let html = format!("{}deep{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let document = HtmlDocument::parse(&html);

        let outer = document.select_first("div").unwrap().unwrap();
        assert_eq!(outer.collect_text().unwrap(), "deep");
        let mut levels = 0;
        let mut node = &outer;
        while let Some(child) = node.children().find(|c| c.is_element()) {
            levels += 1;
            node = child;
        }
        assert_eq!(levels, depth - 1);
        assert!(document.select_first("section").unwrap().is_none());

        let extraction = ClipdownService::new()
            .extract(&document, &ExtractRequest::new("div"))
            .unwrap();
        assert_eq!(extraction.content, "deep");
    }

    #[test]
    fn test_extract_from_document() {
        let document = HtmlDocument::parse(
            r#"<html><head><title>ignored</title></head><body>
                <h1 class="headline"> Release Notes </h1>
                <article id="post">
                  <h2>Changes</h2>
                  <ul>
                    <li>Faster</li>
                    <li>Smaller</li>
                  </ul>
                  <p>See <a href="/docs">the <span>docs</span></a>.</p>
                </article>
            </body></html>"#,
        );
        let request = ExtractRequest::new("#post").with_title_selector("h1.headline");
        let extraction = ClipdownService::new().extract(&document, &request).unwrap();
        assert_eq!(extraction.title, "Release Notes");
        assert!(extraction.content.starts_with("## Changes"));
        assert!(extraction.content.contains("- Faster"));
        assert!(extraction.content.contains("- Smaller"));
        assert!(extraction.content.ends_with("See [the docs](/docs)."));
        assert!(!extraction.content.contains("\n\n\n"));
    }

    #[test]
    fn test_respond_selector_not_found() {
        let document = HtmlDocument::parse("<p>x</p>");
        let response = ClipdownService::new().respond(&document, &ExtractRequest::new("#missing"));
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("no matching content element for `#missing`; check the selector")
        );
    }
}
