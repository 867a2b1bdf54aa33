//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,

    // Directory
    pub static_dir: String,
    pub content_dir: String,

    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub home: HomeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Mike Shin".to_string(),
            author: "Mike Shin".to_string(),
            description: String::new(),

            static_dir: "static".to_string(),
            content_dir: "static/content/blogs".to_string(),

            server: ServerConfig::default(),
            highlight: HighlightConfig::default(),
            navigation: NavigationConfig::default(),
            home: HomeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}

/// Code block highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Name of a theme bundled with syntect
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: true,
        }
    }
}

/// How the corpus is ordered for previous/next links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostOrder {
    /// Sorted by full file name, byte-wise (`a-b.md` before `a.md`)
    #[default]
    Name,
    /// Whatever order the directory listing yields. Filesystem-dependent.
    Listing,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub order: PostOrder,
}

/// Data shown on the home page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub blogs: Vec<BlogCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Path to a thumbnail image
    pub thumbnail: String,
    /// Link to the deployed project, if any
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

/// A featured post on the home page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCard {
    pub title: String,
    pub thumbnail: String,
    pub link: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        let skill = |name: &str, icon: &str| Skill {
            name: name.to_string(),
            icon: icon.to_string(),
        };

        Self {
            projects: vec![Project {
                title: "Trip Tracker website using Go, Templ, HTMX, and TailwindCSS".to_string(),
                thumbnail: "/static/img/project1.png".to_string(),
                link: "https://fromnto.cloud".to_string(),
            }],
            skills: vec![
                skill("GoLang", "https://cdn.simpleicons.org/go"),
                skill("Kubernetes", "https://cdn.simpleicons.org/kubernetes/326CE5"),
                skill("Python", "https://cdn.simpleicons.org/python"),
                skill("Typescript", "https://cdn.simpleicons.org/typescript"),
                skill("Kotlin", "https://cdn.simpleicons.org/kotlin"),
                skill("Rust", "https://cdn.simpleicons.org/rust/ffffff"),
                skill("Kafka", "https://cdn.simpleicons.org/apachekafka/ffffff"),
            ],
            blogs: vec![BlogCard {
                title: "Beginner's Guide to HPCs".to_string(),
                thumbnail: "/static/img/blog1.png".to_string(),
                link: "/blogs/hpc".to_string(),
            }],
        }
    }
}
