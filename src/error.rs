//! Error types for post resolution and rendering

use thiserror::Error;

/// Failures that end a blog request
#[derive(Error, Debug)]
pub enum BlogError {
    /// Empty or malformed identifier, or no readable file behind it
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Markdown conversion failures. Callers degrade these to an inline message.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown highlight theme: {0}")]
    UnknownTheme(String),

    #[error("Highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),
}
