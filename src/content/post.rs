//! Post model and the rendered body handed to page templates

use serde::Serialize;
use std::fmt;

/// A blog post, resolved fresh for every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// File name without the `.md` extension
    #[serde(rename = "id")]
    pub identifier: String,

    pub title: String,

    pub tags: Vec<String>,

    /// Always empty for now; posts carry no date metadata
    pub date: String,

    /// Identifier of the post listed before this one
    #[serde(rename = "prev_post")]
    pub previous: Option<String>,

    /// Identifier of the post listed after this one
    #[serde(rename = "next_post")]
    pub next: Option<String>,
}

impl Post {
    pub fn new(identifier: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            tags,
            date: String::new(),
            previous: None,
            next: None,
        }
    }
}

/// HTML produced by the markdown renderer.
///
/// This is trusted markup: page templates emit it verbatim, without escaping.
/// It can only be built from renderer output or from an escaped error
/// message, never from an arbitrary string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedBody(String);

impl RenderedBody {
    pub(crate) fn trusted(html: String) -> Self {
        Self(html)
    }

    /// Inline fragment shown in place of a body that failed to render
    pub fn render_error(message: &str) -> Self {
        Self(format!(
            r#"<p class="render-error">Error rendering markdown: {}</p>"#,
            super::markdown::html_escape(message)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
