//! Configuration options for Markdown formatting

use serde::Deserialize;

/// How heading levels map onto `#` markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevels {
    /// h5 and h6 both render as `#####`
    #[default]
    Collapsed,
    /// Every level gets its own marker count, h6 renders as `######`
    Distinct,
}

impl HeadingLevels {
    /// Number of `#` characters for a heading of the given level (1-6)
    pub fn marks(self, level: u8) -> usize {
        match (self, level) {
            (_, 0) => 1,
            (HeadingLevels::Collapsed, 6) => 5,
            (_, level) => usize::from(level.min(6)),
        }
    }
}

/// How the visible text of a link is gathered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkText {
    /// Direct text children plus the text children of non-image elements.
    /// Text nested any deeper is dropped.
    #[default]
    Shallow,
    /// All descendant text, images excluded
    Deep,
}

/// Options for Markdown formatting
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,

    /// Fence string for code blocks
    pub fence: String,

    /// Horizontal rule string
    pub hr: String,

    /// Heading marker mapping
    pub heading_levels: HeadingLevels,

    /// Link text collection depth
    pub link_text: LinkText,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_list_marker: '-',
            em_delimiter: '*',
            strong_delimiter: "**".to_string(),
            fence: "```".to_string(),
            hr: "---".to_string(),
            heading_levels: HeadingLevels::Collapsed,
            link_text: LinkText::Shallow,
        }
    }
}
