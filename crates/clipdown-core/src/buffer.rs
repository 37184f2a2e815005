//! Markdown accumulator
//!
//! The buffer tracks nothing beyond its own text: the number of trailing
//! newlines is read back from the tail whenever a block boundary is needed.
//! At most one blank line (`"\n\n"`) is ever added by the boundary helpers.

/// A growable Markdown text buffer owned by a single conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownBuffer {
    text: String,
}

impl MarkdownBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Count the `\n` characters at the end of the buffer
    pub fn trailing_newlines(&self) -> usize {
        self.text.bytes().rev().take_while(|&b| b == b'\n').count()
    }

    /// Blank-line boundary before a block. Nothing is emitted at the very
    /// start of the buffer.
    pub fn open_block(&mut self) {
        if !self.text.is_empty() {
            self.pad_newlines(2);
        }
    }

    /// Blank-line boundary after a block
    pub fn close_block(&mut self) {
        self.pad_newlines(2);
    }

    /// Terminate the current line unless it already is
    pub fn end_line(&mut self) {
        self.pad_newlines(1);
    }

    fn pad_newlines(&mut self, wanted: usize) {
        for _ in self.trailing_newlines()..wanted {
            self.text.push('\n');
        }
    }
}
