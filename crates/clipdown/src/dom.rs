//! The read-only DOM interface the converter walks.
//!
//! A host exposes its tree through [`DomNode`] and resolves CSS selectors
//! through [`DomProvider`]. Every accessor is fallible so that trees backed
//! by a foreign process (CDP, a live page) can report a broken node instead
//! of panicking; a single failure aborts the whole conversion.

use std::borrow::Cow;

use crate::Result;

/// What the walker needs to know about a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Document or fragment root, walked as a transparent container
    Document,
    /// Comments, processing instructions and the like, skipped
    Other,
}

/// A fault raised while reading node properties
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("element node has no tag name")]
    MissingTagName,

    #[error("text node has no value")]
    MissingText,

    #[error("malformed attribute list on <{tag}>: {len} entries, expected name/value pairs")]
    MalformedAttributes { tag: String, len: usize },
}

/// A handle into a read-only document tree
pub trait DomNode: Sized {
    /// Node kind
    fn kind(&self) -> std::result::Result<NodeKind, NodeError>;

    /// Lowercased tag name of an element
    fn tag(&self) -> std::result::Result<Cow<'_, str>, NodeError>;

    /// Attribute lookup, case-insensitive on the name
    fn attribute(&self, name: &str) -> std::result::Result<Option<&str>, NodeError>;

    /// Ordered child nodes
    fn child_nodes(&self) -> std::result::Result<&[Self], NodeError>;

    /// Raw content of a text node
    fn text_value(&self) -> std::result::Result<&str, NodeError>;

    /// Concatenated text of this node and all descendants (`textContent`)
    fn collect_text(&self) -> std::result::Result<String, NodeError> {
        let mut text = String::new();
        push_text(self, &mut text)?;
        Ok(text)
    }
}

fn push_text<N: DomNode>(node: &N, out: &mut String) -> std::result::Result<(), NodeError> {
    match node.kind()? {
        NodeKind::Text => out.push_str(node.text_value()?),
        NodeKind::Element | NodeKind::Document => {
            for child in node.child_nodes()? {
                push_text(child, out)?;
            }
        }
        NodeKind::Other => {}
    }
    Ok(())
}

/// Resolves CSS selectors against a document
pub trait DomProvider {
    type Node: DomNode;

    /// All elements matching `selector`, in document order
    fn select_all(&self, selector: &str) -> Result<Vec<Self::Node>>;

    /// The first element matching `selector`, if any
    ///
    /// Providers that build owned trees should override this so later
    /// matches are never materialized.
    fn select_first(&self, selector: &str) -> Result<Option<Self::Node>> {
        Ok(self.select_all(selector)?.into_iter().next())
    }
}
