//! Content module - blog posts and the markdown pipeline

mod markdown;
pub mod metadata;
pub mod navigator;
mod post;
mod resolver;
pub mod sanitize;

pub use markdown::MarkdownRenderer;
pub use metadata::Metadata;
pub use navigator::{CorpusNavigator, Siblings};
pub use post::{Post, RenderedBody};
pub use resolver::{BlogResolver, ResolvedPost};
