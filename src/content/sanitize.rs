//! Strip metadata lines before markdown conversion

/// Prefix of the line holding a post's tags
pub const TAGS_PREFIX: &str = "Tags:";

/// Remove every line starting with `Tags:`.
///
/// Other lines keep their order and their line endings. The title heading is
/// left in place so it renders as part of the body.
pub fn strip_metadata(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| !line.starts_with(TAGS_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}
