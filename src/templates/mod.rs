//! Page templates using the Tera template engine
//!
//! Templates are embedded in the binary. Auto-escaping stays on for every
//! value except the rendered post body, which is trusted HTML and is emitted
//! with `| safe`.

use anyhow::Result;
use chrono::{Datelike, Local};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{HomeConfig, SiteConfig};
use crate::content::{Post, RenderedBody};

/// URL prefix of blog pages
pub const BLOG_PREFIX: &str = "/blogs/";

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
    site: SiteData,
}

/// Site-wide values available to every template as `site`
#[derive(Debug, Clone, Serialize)]
struct SiteData {
    title: String,
    author: String,
    description: String,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("blog.html", include_str!("site/blog.html")),
        ])?;

        tera.register_filter("post_url", post_url_filter);

        Ok(Self {
            tera,
            site: SiteData {
                title: config.title.clone(),
                author: config.author.clone(),
                description: config.description.clone(),
            },
        })
    }

    /// Render a blog page around an already rendered body
    pub fn render_blog(&self, post: &Post, body: &RenderedBody) -> tera::Result<String> {
        let mut context = self.base_context();
        context.insert("post", post);
        context.insert("body", body);
        self.tera.render("blog.html", &context)
    }

    /// Render the home page
    pub fn render_home(&self, home: &HomeConfig) -> tera::Result<String> {
        let mut context = self.base_context();
        context.insert("projects", &home.projects);
        context.insert("skills", &home.skills);
        context.insert("blogs", &home.blogs);
        context.insert("today", &Local::now().format("%B %-d, %Y").to_string());
        self.tera.render("home.html", &context)
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        context.insert("year", &Local::now().year());
        context
    }
}

/// Link to a post page, percent-encoding the identifier
pub fn post_url(identifier: &str) -> String {
    format!(
        "{}{}",
        BLOG_PREFIX,
        utf8_percent_encode(identifier, NON_ALPHANUMERIC)
    )
}

/// Tera filter: identifier to post URL
fn post_url_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let identifier = tera::try_get_value!("post_url", "value", String, value);
    Ok(tera::Value::String(post_url(&identifier)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new(&SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_post_url() {
        assert_eq!(post_url("hpc"), "/blogs/hpc");
        assert_eq!(post_url("a b/c"), "/blogs/a%20b%2Fc");
    }

    #[test]
    fn test_render_blog_keeps_body_verbatim() {
        let post = Post::new("hpc", "Intro to HPC", vec!["HPC".into(), "Learning".into()]);
        let body = RenderedBody::trusted("<h1>Intro to HPC</h1>\n<p>Body text.</p>\n".into());

        let html = renderer().render_blog(&post, &body).unwrap();
        assert!(html.contains("<title>Intro to HPC | Mike Shin</title>"));
        assert!(html.contains("<h1>Intro to HPC</h1>\n<p>Body text.</p>"));
        assert!(html.contains(r#"<li class="tag">HPC</li>"#));
        assert!(html.contains(r#"<li class="tag">Learning</li>"#));
        assert!(!html.contains(r#"class="prev""#));
        assert!(!html.contains(r#"class="next""#));
    }

    #[test]
    fn test_render_blog_escapes_metadata() {
        let post = Post::new("x", "<script>alert(1)</script>", vec!["<b>".into()]);
        let body = RenderedBody::trusted("<p>ok</p>".into());

        let html = renderer().render_blog(&post, &body).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("<p>ok</p>"));
    }

    #[test]
    fn test_render_blog_navigation() {
        let mut post = Post::new("b", "B", Vec::new());
        post.previous = Some("a".to_string());
        post.next = Some("c d".to_string());
        let body = RenderedBody::trusted(String::new());

        let html = renderer().render_blog(&post, &body).unwrap();
        assert!(html.contains(r#"<a class="prev" href="/blogs/a">"#));
        assert!(html.contains(r#"<a class="next" href="/blogs/c%20d">"#));
        assert!(!html.contains(r#"class="post-tags""#));
    }

    #[test]
    fn test_render_home() {
        let config = SiteConfig::default();
        let html = renderer().render_home(&config.home).unwrap();
        assert!(html.contains("Projects"));
        assert!(html.contains("Kubernetes"));
        assert!(html.contains("Guide to HPCs"));
    }
}
