//! List site content

use anyhow::Result;
use indexmap::IndexMap;
use std::fs;

use crate::content::navigator::{adjacent, MARKDOWN_EXT};
use crate::content::{Metadata, Post};
use crate::Portfolio;

/// List posts or tags, optionally as JSON
pub fn run(portfolio: &Portfolio, content_type: &str, json: bool) -> Result<()> {
    let posts = load_posts(portfolio)?;

    match content_type {
        "post" | "posts" => {
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.identifier,
                    post.title,
                    post.tags.join(", ")
                );
            }
        }
        "tag" | "tags" => {
            let tags = tag_counts(&posts);
            if json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
                return Ok(());
            }
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}

/// Every post in navigation order.
///
/// Reads each file once for its metadata; bodies are not rendered.
pub fn load_posts(portfolio: &Portfolio) -> Result<Vec<Post>> {
    let resolver = portfolio.resolver();
    let identifiers = resolver.navigator().identifiers()?;
    let mut posts = Vec::with_capacity(identifiers.len());

    for id in &identifiers {
        let path = resolver
            .content_dir()
            .join(format!("{}{}", id, MARKDOWN_EXT));
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to load post {:?}: {}", path, e);
                continue;
            }
        };

        let metadata = Metadata::extract(&raw);
        let siblings = adjacent(&identifiers, id);
        let mut post = Post::new(id.as_str(), metadata.title, metadata.tags);
        post.previous = siblings.previous;
        post.next = siblings.next;
        posts.push(post);
    }

    Ok(posts)
}

/// Posts per tag, in the order tags are first seen
pub fn tag_counts(posts: &[Post]) -> IndexMap<String, usize> {
    let mut tags = IndexMap::new();
    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    tags
}
