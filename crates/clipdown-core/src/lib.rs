//! clipdown-core - Markdown accumulation and normalization
//!
//! This crate holds the tree-independent half of clipdown: the text buffer a
//! conversion appends to, the final cleanup pass, and the formatting options.
//! It is used by `clipdown`, which walks DOM trees and feeds the buffer.
//!
//! # Architecture
//!
//! ```text
//!                 ┌────────────────┐
//! DOM Node Tree ─▶│ MarkdownBuffer │ ──cleanup──▶ Markdown String
//!   (walker)      └────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use clipdown_core::{cleanup, MarkdownBuffer};
//!
//! let mut buf = MarkdownBuffer::new();
//! buf.push_str("# Title");
//! buf.close_block();
//! buf.open_block();
//! buf.push_str("Body text   ");
//! buf.close_block();
//!
//! assert_eq!(cleanup(buf.as_str()), "# Title\n\nBody text");
//! ```

mod buffer;
mod cleanup;
mod options;

pub use buffer::MarkdownBuffer;
pub use cleanup::cleanup;
pub use options::{HeadingLevels, LinkText, Options};
