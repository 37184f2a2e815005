//! Convert a DOM tree to Markdown
//!
//! A single depth-first pass appends to one [`MarkdownBuffer`]. Blockquotes
//! and table cells are rendered into their own scratch buffers first, then
//! post-processed (line prefixing, newline flattening) before being appended.

use clipdown_core::{cleanup, LinkText, MarkdownBuffer, Options};
use tracing::{debug, trace};

use crate::dom::{DomNode, NodeError, NodeKind};
use crate::tag::{ListKind, Tag};

type WalkResult = Result<(), NodeError>;

/// Convert `root` and everything below it to normalized Markdown
pub fn convert<N: DomNode>(root: &N, options: &Options) -> Result<String, NodeError> {
    render(options, |walker, out| walker.walk(root, Context::default(), out))
}

/// Convert only the children of `root`, leaving its own tag unformatted
pub fn convert_children<N: DomNode>(root: &N, options: &Options) -> Result<String, NodeError> {
    render(options, |walker, out| walker.walk_children(root, Context::default(), out))
}

fn render<F>(options: &Options, walk: F) -> Result<String, NodeError>
where
    F: FnOnce(&Walker<'_>, &mut MarkdownBuffer) -> WalkResult,
{
    let walker = Walker { options };
    let mut out = MarkdownBuffer::with_capacity(4096);
    walk(&walker, &mut out)?;
    debug!(raw_len = out.len(), "tree walk finished");
    Ok(cleanup(out.as_str()))
}

/// State inherited from ancestors and siblings
#[derive(Debug, Clone, Copy)]
struct Context {
    /// Nearest enclosing list
    list: Option<ListKind>,
    /// 1-based index among the parent's element children
    position: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            list: None,
            position: 1,
        }
    }
}

struct Walker<'o> {
    options: &'o Options,
}

impl Walker<'_> {
    fn walk<N: DomNode>(&self, node: &N, ctx: Context, out: &mut MarkdownBuffer) -> WalkResult {
        match node.kind()? {
            NodeKind::Text => out.push_str(node.text_value()?),
            NodeKind::Element => self.walk_element(node, ctx, out)?,
            NodeKind::Document => self.walk_children(node, ctx, out)?,
            NodeKind::Other => {}
        }
        Ok(())
    }

    fn walk_children<N: DomNode>(
        &self,
        node: &N,
        ctx: Context,
        out: &mut MarkdownBuffer,
    ) -> WalkResult {
        let mut position = 0;
        for child in node.child_nodes()? {
            if child.kind()? == NodeKind::Element {
                position += 1;
            }
            self.walk(child, Context { position, ..ctx }, out)?;
        }
        Ok(())
    }

    fn walk_element<N: DomNode>(
        &self,
        node: &N,
        ctx: Context,
        out: &mut MarkdownBuffer,
    ) -> WalkResult {
        let tag = Tag::from_name(&node.tag()?);
        trace!(?tag, position = ctx.position, "element");

        match tag {
            Tag::Container | Tag::Transparent => self.walk_children(node, ctx, out)?,

            Tag::Paragraph => {
                out.open_block();
                self.walk_children(node, ctx, out)?;
                out.close_block();
            }

            Tag::LineBreak => out.push('\n'),

            Tag::Heading(level) => {
                out.open_block();
                for _ in 0..self.options.heading_levels.marks(level) {
                    out.push('#');
                }
                out.push(' ');
                self.walk_children(node, ctx, out)?;
                out.close_block();
            }

            Tag::List(kind) => {
                out.open_block();
                let inner = Context {
                    list: Some(kind),
                    ..ctx
                };
                self.walk_children(node, inner, out)?;
                out.close_block();
            }

            Tag::ListItem => {
                match ctx.list {
                    Some(ListKind::Ordered) => out.push_str(&format!("{}. ", ctx.position)),
                    _ => {
                        out.push(self.options.bullet_list_marker);
                        out.push(' ');
                    }
                }
                self.walk_children(node, ctx, out)?;
                out.end_line();
            }

            Tag::Image => {
                let src = node.attribute("src")?.unwrap_or("");
                if !src.is_empty() {
                    let alt = node.attribute("alt")?.unwrap_or("");
                    out.push_str(&format!("![{alt}]({src})"));
                }
            }

            Tag::Anchor => self.walk_link(node, out)?,

            Tag::Strong => {
                let delimiter = &self.options.strong_delimiter;
                out.push_str(delimiter);
                self.walk_children(node, ctx, out)?;
                out.push_str(delimiter);
            }

            Tag::Emphasis => {
                out.push(self.options.em_delimiter);
                self.walk_children(node, ctx, out)?;
                out.push(self.options.em_delimiter);
            }

            Tag::Code => {
                out.push('`');
                self.walk_children(node, ctx, out)?;
                out.push('`');
            }

            Tag::Preformatted => {
                out.open_block();
                out.push_str(&self.options.fence);
                out.push('\n');
                self.walk_children(node, ctx, out)?;
                out.end_line();
                out.push_str(&self.options.fence);
                out.push_str("\n\n");
            }

            Tag::BlockQuote => {
                out.open_block();
                let body = self.capture(node, ctx)?;
                for line in body.split('\n') {
                    if !line.trim().is_empty() {
                        out.push_str("> ");
                        out.push_str(line);
                        out.push('\n');
                    } else if line.is_empty() {
                        out.push('\n');
                    }
                }
                out.push('\n');
            }

            Tag::Rule => {
                out.open_block();
                out.push_str(&self.options.hr);
                out.push_str("\n\n");
            }

            Tag::Table => self.walk_table(node, ctx, out)?,
        }

        Ok(())
    }

    /// Render the children of `node` into a fresh buffer
    fn capture<N: DomNode>(&self, node: &N, ctx: Context) -> Result<String, NodeError> {
        let mut scratch = MarkdownBuffer::new();
        self.walk_children(node, ctx, &mut scratch)?;
        Ok(scratch.into_string())
    }

    fn walk_link<N: DomNode>(&self, node: &N, out: &mut MarkdownBuffer) -> WalkResult {
        let mut text = String::new();
        match self.options.link_text {
            LinkText::Shallow => shallow_link_text(node, &mut text)?,
            LinkText::Deep => deep_link_text(node, &mut text)?,
        }

        match node.attribute("href")?.filter(|href| !href.is_empty()) {
            Some(href) => {
                let label = if text.trim().is_empty() { href } else { text.as_str() };
                out.push_str(&format!("[{label}]({href})"));
            }
            None => out.push_str(&text),
        }
        Ok(())
    }

    fn walk_table<N: DomNode>(
        &self,
        table: &N,
        ctx: Context,
        out: &mut MarkdownBuffer,
    ) -> WalkResult {
        out.open_block();

        let mut header_cells = Vec::new();
        descendants_named(table, "th", &mut header_cells)?;
        if !header_cells.is_empty() {
            let cells = self.cell_texts(&header_cells, ctx)?;
            push_row(out, cells.iter().map(String::as_str));
            push_row(out, cells.iter().map(|_| "---"));
        }

        let mut rows = Vec::new();
        descendants_named(table, "tr", &mut rows)?;
        for row in rows {
            if has_descendant_named(row, "th")? {
                continue;
            }
            let mut data_cells = Vec::new();
            descendants_named(row, "td", &mut data_cells)?;
            let cells = self.cell_texts(&data_cells, ctx)?;
            push_row(out, cells.iter().map(String::as_str));
        }

        out.push('\n');
        Ok(())
    }

    /// Each cell rendered in isolation, newlines flattened to spaces
    fn cell_texts<N: DomNode>(
        &self,
        cells: &[&N],
        ctx: Context,
    ) -> Result<Vec<String>, NodeError> {
        cells
            .iter()
            .map(|cell| -> Result<String, NodeError> {
                let text = self.capture(*cell, ctx)?;
                Ok(text.replace('\n', " ").trim().to_string())
            })
            .collect()
    }
}

fn push_row<'a>(out: &mut MarkdownBuffer, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}

/// Text children, plus the text children of non-image element children
fn shallow_link_text<N: DomNode>(node: &N, text: &mut String) -> WalkResult {
    for child in node.child_nodes()? {
        match child.kind()? {
            NodeKind::Text => text.push_str(child.text_value()?),
            NodeKind::Element if child.tag()? != "img" => {
                for grandchild in child.child_nodes()? {
                    if grandchild.kind()? == NodeKind::Text {
                        text.push_str(grandchild.text_value()?);
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn deep_link_text<N: DomNode>(node: &N, text: &mut String) -> WalkResult {
    for child in node.child_nodes()? {
        match child.kind()? {
            NodeKind::Text => text.push_str(child.text_value()?),
            NodeKind::Element if child.tag()? != "img" => deep_link_text(child, text)?,
            _ => {}
        }
    }
    Ok(())
}

/// Elements below `node` (not `node` itself) with the given tag, in document order
fn descendants_named<'n, N: DomNode>(
    node: &'n N,
    tag: &str,
    found: &mut Vec<&'n N>,
) -> WalkResult {
    for child in node.child_nodes()? {
        if child.kind()? != NodeKind::Element {
            continue;
        }
        if child.tag()? == tag {
            found.push(child);
        }
        descendants_named(child, tag, found)?;
    }
    Ok(())
}

fn has_descendant_named<N: DomNode>(node: &N, tag: &str) -> Result<bool, NodeError> {
    for child in node.child_nodes()? {
        if child.kind()? != NodeKind::Element {
            continue;
        }
        if child.tag()? == tag || has_descendant_named(child, tag)? {
            return Ok(true);
        }
    }
    Ok(false)
}
