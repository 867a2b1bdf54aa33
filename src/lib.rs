//! portfolio: a personal portfolio site with a Markdown-backed blog
//!
//! The home page is assembled from in-memory data. Blog posts are Markdown
//! files in a content directory, rendered to HTML on every request with
//! syntax-highlighted code blocks and links to the neighbouring posts.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{BlogResolver, MarkdownRenderer};

/// The portfolio site
#[derive(Debug, Clone)]
pub struct Portfolio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory served under /static
    pub static_dir: PathBuf,
    /// Directory holding one markdown file per post
    pub content_dir: PathBuf,
}

impl Portfolio {
    /// Create a new instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let static_dir = base_dir.join(&config.static_dir);
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            static_dir,
            content_dir,
        }
    }

    /// Build a post resolver for the content directory
    pub fn resolver(&self) -> BlogResolver {
        let renderer = MarkdownRenderer::with_options(
            &self.config.highlight.theme,
            self.config.highlight.line_number,
        );
        BlogResolver::new(&self.content_dir, renderer, self.config.navigation.order)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, tags: &[String]) -> Result<PathBuf> {
        commands::new::create_post(self, title, tags)
    }
}
