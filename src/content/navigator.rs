//! Previous/next links across the content store

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::PostOrder;

/// Extension of post files in the content store
pub const MARKDOWN_EXT: &str = ".md";

/// Identifiers of the posts around the current one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Siblings {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Walks the content store to order posts.
///
/// [`PostOrder::Name`] sorts entries by their full file name, extension
/// included. With [`PostOrder::Listing`] the order is whatever the directory
/// listing returns, which depends on the filesystem.
#[derive(Debug, Clone)]
pub struct CorpusNavigator {
    content_dir: PathBuf,
    order: PostOrder,
}

impl CorpusNavigator {
    pub fn new<P: AsRef<Path>>(content_dir: P, order: PostOrder) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            order,
        }
    }

    /// All post identifiers in corpus order
    pub fn identifiers(&self) -> Result<Vec<String>, walkdir::Error> {
        let mut identifiers = Vec::new();

        let mut walker = WalkDir::new(&self.content_dir).min_depth(1).max_depth(1);
        if self.order == PostOrder::Name {
            walker = walker.sort_by_file_name();
        }

        for entry in walker {
            let entry = entry?;
            let id = entry
                .file_name()
                .to_str()
                .and_then(|name| name.strip_suffix(MARKDOWN_EXT));
            if let Some(id) = id.filter(|id| !id.is_empty()) {
                identifiers.push(id.to_string());
            }
        }

        Ok(identifiers)
    }

    /// Neighbours of `identifier`. Empty when the post is unknown or the
    /// store cannot be listed.
    pub fn siblings(&self, identifier: &str) -> Siblings {
        match self.identifiers() {
            Ok(identifiers) => adjacent(&identifiers, identifier),
            Err(e) => {
                tracing::warn!("Failed to list posts in {:?}: {}", self.content_dir, e);
                Siblings::default()
            }
        }
    }
}

/// Neighbours of the first occurrence of `current` in `identifiers`
pub fn adjacent(identifiers: &[String], current: &str) -> Siblings {
    let Some(pos) = identifiers.iter().position(|id| id == current) else {
        return Siblings::default();
    };

    Siblings {
        previous: pos.checked_sub(1).map(|i| identifiers[i].clone()),
        next: identifiers.get(pos + 1).cloned(),
    }
}
