//! ClipdownService - the main entry point for DOM to Markdown conversion.

use tracing::debug;

use crate::convert::{convert, convert_children};
use crate::dom::{DomNode, DomProvider};
use crate::extract::{ExtractRequest, ExtractResponse, Extraction};
use crate::{ClipdownError, Options, Result};

/// The main service for converting DOM nodes to Markdown
#[derive(Debug, Clone, Default)]
pub struct ClipdownService {
    options: Options,
}

impl ClipdownService {
    /// Create a new ClipdownService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ClipdownService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert a DOM node and its subtree to Markdown
    pub fn convert<N: DomNode>(&self, root: &N) -> Result<String> {
        Ok(convert(root, &self.options)?)
    }

    /// Convert an HTML fragment to Markdown
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<String> {
        self.convert(&crate::html::parse_html(html))
    }

    /// Resolve the request's selectors against `provider` and convert the
    /// inner content of the first content match.
    pub fn extract<P: DomProvider>(
        &self,
        provider: &P,
        request: &ExtractRequest,
    ) -> Result<Extraction> {
        let title_selector = request
            .title_selector
            .as_deref()
            .filter(|selector| !selector.is_empty());
        let title = match title_selector {
            Some(selector) => match provider.select_first(selector)? {
                Some(element) => element.collect_text()?.trim().to_string(),
                None => String::new(),
            },
            None => String::new(),
        };

        let Some(root) = provider.select_first(&request.content_selector)? else {
            return Err(ClipdownError::SelectorNotFound(
                request.content_selector.clone(),
            ));
        };
        debug!(selector = %request.content_selector, "content selector resolved");

        let content = convert_children(&root, &self.options)?;
        debug!(title_len = title.len(), content_len = content.len(), "extraction finished");

        Ok(Extraction { title, content })
    }

    /// Like [`ClipdownService::extract`], folding any failure into the
    /// structured response
    pub fn respond<P: DomProvider>(
        &self,
        provider: &P,
        request: &ExtractRequest,
    ) -> ExtractResponse {
        ExtractResponse::from(self.extract(provider, request))
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
