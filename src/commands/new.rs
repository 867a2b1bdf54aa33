//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::navigator::MARKDOWN_EXT;
use crate::content::sanitize::TAGS_PREFIX;
use crate::Portfolio;

/// Write `<slug>.md` with a title heading and a tags line
pub fn create_post(portfolio: &Portfolio, title: &str, tags: &[String]) -> Result<PathBuf> {
    let title = single_line(title);
    let title = title.trim();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    fs::create_dir_all(&portfolio.content_dir)?;
    let file_path = portfolio
        .content_dir
        .join(format!("{}{}", slug, MARKDOWN_EXT));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let tags: Vec<&str> = tags
        .iter()
        .flat_map(|tag| tag.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect();

    let mut content = format!("# {}\n", title);
    if !tags.is_empty() {
        content.push_str(&format!("{} {}\n", TAGS_PREFIX, tags.join(", ")));
    }
    content.push('\n');

    fs::write(&file_path, content)?;
    tracing::info!("Created post {:?}", file_path);

    Ok(file_path)
}

/// Control characters become spaces so the title stays on one line
fn single_line(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_post() {
        let dir = tempdir().unwrap();
        let portfolio = Portfolio::new(dir.path()).unwrap();

        let path = create_post(
            &portfolio,
            "  Hello, World  ",
            &["rust".to_string(), "web, blog".to_string()],
        )
        .unwrap();
        assert_eq!(path, portfolio.content_dir.join("hello-world.md"));

        let resolved = portfolio.resolver().resolve("hello-world").unwrap();
        assert_eq!(resolved.post.title, "Hello, World");
        assert_eq!(resolved.post.tags, vec!["rust", "web", "blog"]);
    }

    #[test]
    fn test_create_post_without_tags() {
        let dir = tempdir().unwrap();
        let portfolio = Portfolio::new(dir.path()).unwrap();

        let path = portfolio.new_post("Plain", &[]).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "# Plain\n\n");
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let portfolio = Portfolio::new(dir.path()).unwrap();

        create_post(&portfolio, "Twice", &[]).unwrap();
        assert!(create_post(&portfolio, "Twice", &[]).is_err());
    }

    #[test]
    fn test_title_control_chars_stay_on_one_line() {
        let dir = tempdir().unwrap();
        let portfolio = Portfolio::new(dir.path()).unwrap();

        let path = create_post(&portfolio, "A\nTags: x", &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# A Tags: x\n\n");

        let id = path.file_stem().unwrap().to_str().unwrap();
        let resolved = portfolio.resolver().resolve(id).unwrap();
        assert_eq!(resolved.post.title, "A Tags: x");
        assert!(resolved.post.tags.is_empty());
    }

    #[test]
    fn test_create_post_needs_slug() {
        let dir = tempdir().unwrap();
        let portfolio = Portfolio::new(dir.path()).unwrap();
        assert!(create_post(&portfolio, "!!!", &[]).is_err());
    }
}
