//! Render a single page the way the browser loader would

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::content::{CmarkRenderer, SyntectHighlighter};
use crate::fetch::{ContentFetcher, FileFetcher, HttpFetcher};
use crate::loader::PageContentLoader;
use crate::view::HtmlView;
use crate::Site;

/// Options for the view command
pub struct ViewOptions<'a> {
    /// Page file name or URL path
    pub page: &'a str,
    /// Directory or http(s) base URL to fetch from; defaults to the site dir
    pub base: Option<&'a str>,
    /// Viewport width for the navbar layout
    pub width: u32,
    /// Highlight code blocks
    pub highlight: bool,
}

/// Run the load sequence for one page and return the rendered fragment
pub async fn run(site: &Site, opts: &ViewOptions<'_>) -> Result<String> {
    let fetcher = make_fetcher(site, opts.base)?;
    let mut loader = build_loader(site.config.clone(), fetcher, opts.width, opts.highlight);

    loader.open(opts.page).await;

    Ok(loader.view().render_page())
}

fn build_loader(
    config: SiteConfig,
    fetcher: Box<dyn ContentFetcher>,
    width: u32,
    highlight: bool,
) -> PageContentLoader<HtmlView> {
    let mut view = HtmlView::new(&config);
    view.resize(width);

    let loader = PageContentLoader::new(config, fetcher, Box::new(CmarkRenderer::new()), view);

    if highlight {
        loader.with_highlighter(Box::new(SyntectHighlighter::new()))
    } else {
        loader
    }
}

/// Pick the HTTP or directory backend from the base argument
fn make_fetcher(site: &Site, base: Option<&str>) -> Result<Box<dyn ContentFetcher>> {
    match base {
        Some(base) if base.starts_with("http://") || base.starts_with("https://") => {
            let url = reqwest::Url::parse(base)
                .with_context(|| format!("invalid base URL: {}", base))?;
            Ok(Box::new(HttpFetcher::new(url)))
        }
        Some(base) => Ok(Box::new(FileFetcher::new(base))),
        None => Ok(Box::new(FileFetcher::new(&site.base_dir))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_in(dir: &std::path::Path) -> Site {
        Site::new(dir).unwrap()
    }

    #[tokio::test]
    async fn test_view_renders_mapped_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("md")).unwrap();
        fs::write(dir.path().join("md/home.md"), "# Welcome\n\nHello.").unwrap();

        let site = site_in(dir.path());
        let opts = ViewOptions {
            page: "index.html",
            base: None,
            width: 1024,
            highlight: false,
        };

        let fragment = run(&site, &opts).await.unwrap();
        assert!(fragment.contains("<h1>Welcome</h1>"));
        assert!(fragment.contains(r#"class="nav-link active" href="index.html""#));
        assert!(fragment.contains("flex-direction: row"));
        assert!(fragment.contains(r#"<main class="markdown-content">"#));
    }

    #[tokio::test]
    async fn test_view_narrow_viewport_stacks_navbar() {
        let dir = tempfile::tempdir().unwrap();

        let site = site_in(dir.path());
        let opts = ViewOptions {
            page: "about.html",
            base: None,
            width: 500,
            highlight: false,
        };

        let fragment = run(&site, &opts).await.unwrap();
        assert!(fragment.contains("flex-direction: column"));
        // Unmapped page: the container stays empty
        assert!(fragment.contains("<main class=\"markdown-content\">\n\n</main>"));
    }

    #[tokio::test]
    async fn test_view_missing_content_shows_error() {
        let dir = tempfile::tempdir().unwrap();

        let site = site_in(dir.path());
        let opts = ViewOptions {
            page: "/news.html",
            base: None,
            width: 1024,
            highlight: false,
        };

        let fragment = run(&site, &opts).await.unwrap();
        assert!(fragment.contains("error-message"));
        assert!(fragment.contains("404"));
    }

    #[tokio::test]
    async fn test_view_highlights_code() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("md")).unwrap();
        fs::write(
            dir.path().join("md/home.md"),
            "```rust\nfn main() {}\n```",
        )
        .unwrap();

        let site = site_in(dir.path());
        let opts = ViewOptions {
            page: "index.html",
            base: None,
            width: 1024,
            highlight: true,
        };

        let fragment = run(&site, &opts).await.unwrap();
        assert!(fragment.contains(r#"<figure class="highlight rust">"#));
    }
}
