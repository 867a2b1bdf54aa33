//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::RenderError;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

/// A fenced or indented code block being collected
struct CodeBlock {
    lang: Option<String>,
    code: String,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", true)
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    /// Whether the configured theme ships with syntect
    pub fn has_theme(&self) -> bool {
        self.theme_set.themes.contains_key(&self.theme_name)
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<CodeBlock> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info_lang(&info),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some(CodeBlock {
                        lang,
                        code: String::new(),
                    });
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = code_block.take() {
                        let highlighted = self.highlight_code(&block.code, block.lang.as_deref())?;
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) => match code_block.as_mut() {
                    Some(block) => block.code.push_str(&text),
                    None => events.push(Event::Text(text)),
                },
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block.
    ///
    /// Only languages syntect recognizes get highlighted; everything else is
    /// emitted as an escaped `<pre><code>` block.
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> Result<String, RenderError> {
        let Some((lang, syntax)) =
            lang.and_then(|l| self.syntax_set.find_syntax_by_token(l).map(|s| (l, s)))
        else {
            return Ok(plain_code_block(code, lang));
        };

        let theme = self.theme()?;
        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(code) {
            let regions = highlighter.highlight_line(line, &self.syntax_set)?;
            lines.push(styled_line_to_highlighted_html(
                &regions[..],
                IncludeBackground::No,
            )?);
        }

        let lang = html_escape(lang);
        let background = background_style(theme);

        if self.line_numbers {
            Ok(self.add_line_numbers(&lines, &lang, &background))
        } else {
            Ok(format!(
                r#"<pre class="highlight {}" style="{}"><code class="language-{}">{}</code></pre>"#,
                lang,
                background,
                lang,
                lines.concat()
            ))
        }
    }

    fn theme(&self) -> Result<&Theme, RenderError> {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .ok_or_else(|| RenderError::UnknownTheme(self.theme_name.clone()))
    }

    /// Lay highlighted lines out next to a gutter of line numbers
    fn add_line_numbers(&self, lines: &[String], lang: &str, background: &str) -> String {
        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre style="{}">{}</pre></td></tr></table></figure>"#,
            lang,
            gutter,
            background,
            lines.concat()
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// First token of a fence info string, e.g. `rust` for "rust,ignore"
fn info_lang(info: &str) -> Option<String> {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
}

fn plain_code_block(code: &str, lang: Option<&str>) -> String {
    match lang {
        Some(lang) => format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            html_escape(lang),
            html_escape(code)
        ),
        None => format!("<pre><code>{}</code></pre>", html_escape(code)),
    }
}

fn background_style(theme: &Theme) -> String {
    theme
        .settings
        .background
        .map(|c| format!("background-color:#{:02x}{:02x}{:02x};", c.r, c.g, c.b))
        .unwrap_or_default()
}

/// Simple HTML escaping
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.").unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
        assert!(!html.contains("Tags:"));
    }

    #[test]
    fn test_render_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |\n").unwrap();
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer
            .render("```rust\nfn main() {\n    println!(\"hi\");\n}\n```")
            .unwrap();
        assert!(html.contains(r#"<figure class="highlight rust">"#));
        assert!(html.contains(r#"<span class="line-number">3</span>"#));
        assert!(html.contains("<span style=\"color:"));
        assert!(!html.contains("<pre><code>"));
    }

    #[test]
    fn test_render_code_block_without_line_numbers() {
        let renderer = MarkdownRenderer::with_options("base16-ocean.dark", false);
        let html = renderer.render("```python\nprint(1)\n```").unwrap();
        assert!(html.contains(r#"<pre class="highlight python""#));
        assert!(!html.contains("line-number"));
    }

    #[test]
    fn test_unknown_language_is_plain() {
        let renderer = MarkdownRenderer::new();
        let html = renderer
            .render("```nosuchlang\n<b>bold</b>\n```")
            .unwrap();
        assert!(html.contains(r#"<pre><code class="language-nosuchlang">"#));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("highlight"));
    }

    #[test]
    fn test_indented_code_is_plain() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Para\n\n    let x = 1 < 2;\n").unwrap();
        assert!(html.contains("<pre><code>let x = 1 &lt; 2;\n</code></pre>"));
    }

    #[test]
    fn test_info_string_extras() {
        assert_eq!(info_lang("rust,ignore"), Some("rust".to_string()));
        assert_eq!(info_lang("js title=\"x\""), Some("js".to_string()));
        assert_eq!(info_lang(""), None);
    }

    #[test]
    fn test_unknown_theme_fails_on_highlight() {
        let renderer = MarkdownRenderer::with_options("no-such-theme", true);
        assert!(!renderer.has_theme());
        // Nothing to highlight, nothing to fail
        assert!(renderer.render("# Just text").is_ok());

        let err = renderer.render("```rust\nfn main() {}\n```").unwrap_err();
        assert!(matches!(err, RenderError::UnknownTheme(ref name) if name == "no-such-theme"));
    }
}
