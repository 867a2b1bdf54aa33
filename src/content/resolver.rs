//! Blog post resolution - loads a post and drives the rendering pipeline

use std::fs;
use std::path::{Path, PathBuf};

use super::metadata::Metadata;
use super::navigator::{CorpusNavigator, MARKDOWN_EXT};
use super::sanitize::strip_metadata;
use super::{MarkdownRenderer, Post, RenderedBody};
use crate::config::PostOrder;
use crate::error::BlogError;
use crate::templates::TemplateRenderer;

/// A post together with its rendered body
#[derive(Debug, Clone)]
pub struct ResolvedPost {
    pub post: Post,
    pub body: RenderedBody,
}

/// Turns a post identifier into a [`ResolvedPost`].
///
/// Holds no per-request state; every call re-reads and re-renders the file.
pub struct BlogResolver {
    content_dir: PathBuf,
    renderer: MarkdownRenderer,
    navigator: CorpusNavigator,
}

impl BlogResolver {
    pub fn new<P: AsRef<Path>>(content_dir: P, renderer: MarkdownRenderer, order: PostOrder) -> Self {
        let content_dir = content_dir.as_ref().to_path_buf();
        let navigator = CorpusNavigator::new(&content_dir, order);
        Self {
            content_dir,
            renderer,
            navigator,
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn renderer(&self) -> &MarkdownRenderer {
        &self.renderer
    }

    pub fn navigator(&self) -> &CorpusNavigator {
        &self.navigator
    }

    /// Load, parse and render a single post
    pub fn resolve(&self, identifier: &str) -> Result<ResolvedPost, BlogError> {
        if !is_valid_identifier(identifier) {
            return Err(BlogError::NotFound(identifier.to_string()));
        }

        let path = self
            .content_dir
            .join(format!("{}{}", identifier, MARKDOWN_EXT));
        let raw = fs::read_to_string(&path).map_err(|e| {
            tracing::debug!("Cannot read post {:?}: {}", path, e);
            BlogError::NotFound(identifier.to_string())
        })?;

        let metadata = Metadata::extract(&raw);
        let body = self.render_body(identifier, &strip_metadata(&raw));
        let siblings = self.navigator.siblings(identifier);

        let mut post = Post::new(identifier, metadata.title, metadata.tags);
        post.previous = siblings.previous;
        post.next = siblings.next;

        tracing::debug!(
            "Resolved post {} (prev: {:?}, next: {:?})",
            identifier,
            post.previous,
            post.next
        );

        Ok(ResolvedPost { post, body })
    }

    /// Resolve a post and render its full page
    pub fn render_page(
        &self,
        identifier: &str,
        templates: &TemplateRenderer,
    ) -> Result<String, BlogError> {
        let resolved = self.resolve(identifier)?;
        Ok(templates.render_blog(&resolved.post, &resolved.body)?)
    }

    fn render_body(&self, identifier: &str, markdown: &str) -> RenderedBody {
        match self.renderer.render(markdown) {
            Ok(html) => RenderedBody::trusted(html),
            Err(e) => {
                tracing::warn!("Failed to render post {}: {}", identifier, e);
                RenderedBody::render_error(&e.to_string())
            }
        }
    }
}

/// Identifiers name a single file directly inside the content store
fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier != "."
        && identifier != ".."
        && !identifier.contains(['/', '\\'])
}
