//! Title and tag extraction from raw post text

use lazy_static::lazy_static;
use regex::Regex;

/// Title used when a post has no level-one heading
pub const UNTITLED: &str = "Untitled";

lazy_static! {
    static ref TITLE_REGEX: Regex = Regex::new(r"(?m)^# (.+)$").unwrap();
    static ref TAGS_REGEX: Regex = Regex::new(r"(?m)^Tags:\s*(.+)$").unwrap();
}

/// Metadata carried inline by a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub tags: Vec<String>,
}

impl Metadata {
    /// Scan raw markdown for the first `# ` heading and the first `Tags:` line
    pub fn extract(content: &str) -> Self {
        Self {
            title: extract_title(content),
            tags: extract_tags(content),
        }
    }
}

/// First level-one heading, trimmed, or [`UNTITLED`]
pub fn extract_title(content: &str) -> String {
    TITLE_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Comma-separated values of the first `Tags:` line
pub fn extract_tags(content: &str) -> Vec<String> {
    match TAGS_REGEX.captures(content).and_then(|caps| caps.get(1)) {
        Some(m) => m
            .as_str()
            .trim()
            .split(',')
            .map(|tag| tag.trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# Foo\n\nBody"), "Foo");
        assert_eq!(extract_title("Intro\n#   Spaced out   \n"), "Spaced out");
    }

    #[test]
    fn test_first_heading_wins() {
        let content = "Some text\n# First\n## Sub\n# Second\n";
        assert_eq!(extract_title(content), "First");
    }

    #[test]
    fn test_missing_title() {
        assert_eq!(extract_title("## Only a subheading\nText"), UNTITLED);
        assert_eq!(extract_title("#NoSpace"), UNTITLED);
        assert_eq!(extract_title(""), UNTITLED);
    }

    #[test]
    fn test_title_with_crlf() {
        assert_eq!(extract_title("# Windows\r\nBody\r\n"), "Windows");
    }

    #[test]
    fn test_extract_tags() {
        assert_eq!(extract_tags("Tags: a, b , c"), vec!["a", "b", "c"]);
        assert_eq!(
            extract_tags("# Title\nTags:HPC,Learning\nBody"),
            vec!["HPC", "Learning"]
        );
    }

    #[test]
    fn test_tags_keep_duplicates_and_order() {
        assert_eq!(extract_tags("Tags: z, a, z"), vec!["z", "a", "z"]);
    }

    #[test]
    fn test_first_tags_line_wins() {
        let content = "Tags: one\nTags: two\n";
        assert_eq!(extract_tags(content), vec!["one"]);
    }

    #[test]
    fn test_missing_tags() {
        assert!(extract_tags("# Title\nBody").is_empty());
        // Must be anchored at the start of the line
        assert!(extract_tags("  Tags: indented").is_empty());
        assert!(extract_tags("Some Tags: inline").is_empty());
    }

    #[test]
    fn test_extract_metadata() {
        let meta = Metadata::extract("# Intro to HPC\nTags: HPC, Learning\nBody text.");
        assert_eq!(meta.title, "Intro to HPC");
        assert_eq!(meta.tags, vec!["HPC", "Learning"]);
    }
}
