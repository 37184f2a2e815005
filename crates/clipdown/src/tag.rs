//! Recognized element tags.

/// Kind of list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// Formatting strategy for an element, keyed by its lowercased tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `div`, `section`, `article`
    Container,
    Paragraph,
    LineBreak,
    /// `h1`..`h6` with their level
    Heading(u8),
    List(ListKind),
    ListItem,
    Image,
    Anchor,
    /// `strong`, `b`
    Strong,
    /// `em`, `i`
    Emphasis,
    Code,
    Preformatted,
    BlockQuote,
    Rule,
    Table,
    /// Anything else: children are walked, no markup is emitted
    Transparent,
}

impl Tag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "div" | "section" | "article" => Tag::Container,
            "p" => Tag::Paragraph,
            "br" => Tag::LineBreak,
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "ul" => Tag::List(ListKind::Unordered),
            "ol" => Tag::List(ListKind::Ordered),
            "li" => Tag::ListItem,
            "img" => Tag::Image,
            "a" => Tag::Anchor,
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Emphasis,
            "code" => Tag::Code,
            "pre" => Tag::Preformatted,
            "blockquote" => Tag::BlockQuote,
            "hr" => Tag::Rule,
            "table" => Tag::Table,
            _ => Tag::Transparent,
        }
    }
}
