//! CDP-style DOM Node structure.
//!
//! This module provides an owned DOM node that matches the Chrome DevTools
//! Protocol `DOM.Node` shape, so the JSON returned by `DOM.getDocument` can be
//! deserialized straight into it. Any parser can build the same structure.

use std::borrow::Cow;

use serde::Deserialize;

use crate::dom::{DomNode, NodeError, NodeKind};

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u32")]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

impl From<u32> for NodeType {
    fn from(value: u32) -> Self {
        match value {
            1 => NodeType::Element,
            3 => NodeType::Text,
            9 => NodeType::Document,
            11 => NodeType::DocumentFragment,
            // CDATA, processing instructions, doctypes: never rendered
            _ => NodeType::Comment,
        }
    }
}

/// A DOM node following the CDP DOM.Node structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Node type (1 = Element, 3 = Text, etc.)
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g., "DIV", "#text" for text nodes)
    #[serde(default)]
    pub node_name: String,

    /// Text content for text nodes
    #[serde(default)]
    pub node_value: Option<String>,

    /// Attributes as flat array [name, value, name, value, ...] (CDP style)
    #[serde(default)]
    pub attributes: Option<Vec<String>>,

    /// Child nodes
    #[serde(default)]
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_uppercase(),
            node_value: None,
            attributes: Some(Vec::new()),
            children: Some(Vec::new()),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let flat_attrs: Vec<String> = attrs
            .into_iter()
            .flat_map(|(k, v)| [k.to_string(), v.to_string()])
            .collect();

        Self {
            attributes: Some(flat_attrs),
            ..Self::element(tag_name)
        }
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: None,
            children: None,
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            ..Self::text(content)
        }
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self {
            node_type: NodeType::DocumentFragment,
            node_name: "#document-fragment".to_string(),
            node_value: None,
            attributes: None,
            children: Some(Vec::new()),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Get an attribute value by name, ignoring a dangling trailing name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()?
            .chunks_exact(2)
            .find(|pair| pair[0].eq_ignore_ascii_case(name))
            .map(|pair| pair[1].as_str())
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }
}

impl DomNode for Node {
    fn kind(&self) -> Result<NodeKind, NodeError> {
        Ok(match self.node_type {
            NodeType::Element => NodeKind::Element,
            NodeType::Text => NodeKind::Text,
            NodeType::Document | NodeType::DocumentFragment => NodeKind::Document,
            NodeType::Comment => NodeKind::Other,
        })
    }

    fn tag(&self) -> Result<Cow<'_, str>, NodeError> {
        if self.node_name.is_empty() {
            return Err(NodeError::MissingTagName);
        }
        if self.node_name.bytes().any(|b| b.is_ascii_uppercase()) {
            Ok(Cow::Owned(self.node_name.to_ascii_lowercase()))
        } else {
            Ok(Cow::Borrowed(self.node_name.as_str()))
        }
    }

    fn attribute(&self, name: &str) -> Result<Option<&str>, NodeError> {
        let Some(attrs) = self.attributes.as_ref() else {
            return Ok(None);
        };
        // CDP stores attributes as flat array: [name, value, name, value, ...]
        if attrs.len() % 2 != 0 {
            return Err(NodeError::MalformedAttributes {
                tag: self.tag_name(),
                len: attrs.len(),
            });
        }
        Ok(self.attr(name))
    }

    fn child_nodes(&self) -> Result<&[Node], NodeError> {
        Ok(self.children.as_deref().unwrap_or(&[]))
    }

    fn text_value(&self) -> Result<&str, NodeError> {
        self.node_value.as_deref().ok_or(NodeError::MissingText)
    }
}
