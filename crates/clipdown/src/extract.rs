//! Extraction request and response messages.
//!
//! These mirror the JSON exchanged between extension surfaces:
//! `{ "contentSelector": "...", "titleSelector": "..." }` in,
//! `{ "success": true, "title": "...", "content": "..." }` or
//! `{ "success": false, "error": "..." }` out.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Which parts of the document to extract
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub content_selector: String,
    #[serde(default)]
    pub title_selector: Option<String>,
}

impl ExtractRequest {
    pub fn new(content_selector: impl Into<String>) -> Self {
        Self {
            content_selector: content_selector.into(),
            title_selector: None,
        }
    }

    pub fn with_title_selector(mut self, title_selector: impl Into<String>) -> Self {
        self.title_selector = Some(title_selector.into());
        self
    }
}

/// A successful extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub title: String,
    pub content: String,
}

/// Structured outcome handed back to the requesting surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Extraction>> for ExtractResponse {
    fn from(result: Result<Extraction>) -> Self {
        match result {
            Ok(Extraction { title, content }) => Self {
                success: true,
                title: Some(title),
                content: Some(content),
                error: None,
            },
            Err(err) => Self {
                success: false,
                title: None,
                content: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClipdownError;

    #[test]
    fn test_request_from_json() {
        let request: ExtractRequest =
            serde_json::from_str(r#"{"contentSelector": "article", "titleSelector": "h1"}"#)
                .unwrap();
        assert_eq!(request, ExtractRequest::new("article").with_title_selector("h1"));

        let bare: ExtractRequest =
            serde_json::from_str(r#"{"contentSelector": ".post"}"#).unwrap();
        assert_eq!(bare.title_selector, None);
    }

    #[test]
    fn test_success_response_json() {
        let response = ExtractResponse::from(Ok(Extraction {
            title: "T".to_string(),
            content: "# Body".to_string(),
        }));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "title": "T", "content": "# Body" })
        );
    }

    #[test]
    fn test_failure_response_json() {
        let response =
            ExtractResponse::from(Err(ClipdownError::SelectorNotFound(".missing".to_string())));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(
            json["error"],
            "no matching content element for `.missing`; check the selector"
        );
        assert!(json.get("content").is_none());
        assert!(json.get("title").is_none());
    }
}
