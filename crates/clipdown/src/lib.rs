//! # clipdown
//!
//! Convert the selected part of a web page into readable article Markdown.
//!
//! A caller resolves a content selector against a document, hands the first
//! matching element to the converter, and receives normalized Markdown back.
//! The conversion is a one-way, lossy, single-pass walk over a read-only
//! tree: it never mutates the tree, performs no I/O and keeps no state
//! between calls.
//!
//! ## Design
//!
//! The converter is generic over [`DomNode`], so any tree can be walked:
//!
//! - **CDP trees**: [`Node`] deserializes directly from `DOM.getDocument` JSON
//! - **HTML strings**: [`parse_html`] and [`HtmlDocument`] (feature `html`)
//! - **Host trees**: implement [`DomNode`] and [`DomProvider`] yourself
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use clipdown::{ClipdownService, Node};
//!
//! let service = ClipdownService::new();
//!
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//!
//! let markdown = service.convert(&h1).unwrap();
//! assert_eq!(markdown, "# Hello World");
//! ```
//!
//! ## Example (selector extraction)
//!
//! ```rust
//! use clipdown::{ClipdownService, ExtractRequest, HtmlDocument};
//!
//! let document = HtmlDocument::parse(
//!     "<h1 class='title'>Post</h1><div id='body'><p>Hello <b>world</b></p></div>",
//! );
//! let request = ExtractRequest::new("#body").with_title_selector(".title");
//!
//! let extraction = ClipdownService::new().extract(&document, &request).unwrap();
//! assert_eq!(extraction.title, "Post");
//! assert_eq!(extraction.content, "Hello **world**");
//! ```

mod convert;
pub mod dom;
mod extract;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod service;
mod tag;

pub use clipdown_core::{HeadingLevels, LinkText, Options};
pub use dom::{DomNode, DomProvider, NodeError, NodeKind};
pub use extract::{ExtractRequest, ExtractResponse, Extraction};
#[cfg(feature = "html")]
pub use html::{parse_html, HtmlDocument};
pub use node::{Node, NodeType};
pub use service::ClipdownService;

/// Error type for clipdown operations
#[derive(Debug, thiserror::Error)]
pub enum ClipdownError {
    #[error("no matching content element for `{0}`; check the selector")]
    SelectorNotFound(String),

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("extraction failed: {0}")]
    ExtractionFailure(#[from] NodeError),
}

pub type Result<T> = std::result::Result<T, ClipdownError>;
