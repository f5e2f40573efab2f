//! Syntax highlighting for rendered code blocks

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

lazy_static! {
    static ref CODE_BLOCK: Regex =
        Regex::new(r#"(?s)<pre><code(?: class="language-([^"]*)")?>(.*?)</code></pre>"#).unwrap();
}

/// Applies syntax highlighting to the code blocks of an HTML fragment
pub trait CodeHighlighter: Send + Sync {
    fn highlight_all(&self, html: &str) -> String;
}

/// syntect-based highlighter
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl SyntectHighlighter {
    /// Create a highlighter with the default theme
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: "base16-ocean.dark".to_string(),
        }
    }

    /// Create a highlighter with a named theme
    pub fn with_theme(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Highlight one code block; None when highlighting is not possible
    fn highlight_block(&self, code: &str, lang: Option<&str>) -> Option<String> {
        let lang = lang.filter(|l| !l.is_empty()).unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())?;

        let highlighted = highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()?;

        Some(format!(
            r#"<figure class="highlight {}">{}</figure>"#,
            lang, highlighted
        ))
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter for SyntectHighlighter {
    fn highlight_all(&self, html: &str) -> String {
        CODE_BLOCK
            .replace_all(html, |caps: &Captures| {
                let lang = caps.get(1).map(|m| m.as_str());
                let code = html_unescape(caps.get(2).map(|m| m.as_str()).unwrap_or(""));

                match self.highlight_block(&code, lang) {
                    Some(highlighted) => highlighted,
                    // Leave the block as rendered when highlighting fails
                    None => caps[0].to_string(),
                }
            })
            .to_string()
    }
}

/// Reverse the entity encoding the markdown renderer applied to code text
fn html_unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_fenced_block() {
        let highlighter = SyntectHighlighter::new();
        let html = r#"<p>intro</p><pre><code class="language-rust">fn main() {}
</code></pre>"#;
        let out = highlighter.highlight_all(html);
        assert!(out.contains(r#"<figure class="highlight rust">"#));
        assert!(!out.contains("<pre><code"));
        // Surrounding markup is untouched
        assert!(out.contains("<p>intro</p>"));
    }

    #[test]
    fn test_highlight_block_without_language() {
        let highlighter = SyntectHighlighter::new();
        let html = "<pre><code>plain text here\n</code></pre>";
        let out = highlighter.highlight_all(html);
        assert!(out.contains(r#"<figure class="highlight text">"#));
    }

    #[test]
    fn test_highlight_unknown_language_falls_back() {
        let highlighter = SyntectHighlighter::new();
        let html = r#"<pre><code class="language-nosuchlang">???
</code></pre>"#;
        let out = highlighter.highlight_all(html);
        assert!(out.contains("highlight nosuchlang"));
        assert!(out.contains("???"));
    }

    #[test]
    fn test_highlight_unescapes_entities() {
        let highlighter = SyntectHighlighter::new();
        let html = r#"<pre><code class="language-html">&lt;b&gt;hi&lt;/b&gt;
</code></pre>"#;
        let out = highlighter.highlight_all(html);
        // The source text reaches syntect decoded, then comes back escaped
        assert!(!out.contains("&amp;lt;"));
    }

    #[test]
    fn test_no_code_blocks_is_untouched() {
        let highlighter = SyntectHighlighter::new();
        let html = "<h1>Title</h1><p>no code</p>";
        assert_eq!(highlighter.highlight_all(html), html);
    }

    #[test]
    fn test_highlight_all_is_idempotent() {
        let highlighter = SyntectHighlighter::new();
        let html = "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>";
        let once = highlighter.highlight_all(html);
        let twice = highlighter.highlight_all(&once);
        assert_eq!(once, twice);
    }
}
