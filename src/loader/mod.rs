//! Page content loader - the fetch, render, inject pipeline

use anyhow::Result;
use tracing::{debug, error};

use crate::config::SiteConfig;
use crate::content::{CodeHighlighter, MarkdownRenderer};
use crate::fetch::ContentFetcher;
use crate::view::ContentView;

/// Resolve the page identifier from a URL path (its last segment)
///
/// Empty and root paths resolve to an empty identifier, which matches no
/// page-map entry.
pub fn resolve_current_page(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Loads page content and drives a view through the load lifecycle
pub struct PageContentLoader<V: ContentView> {
    config: SiteConfig,
    fetcher: Box<dyn ContentFetcher>,
    renderer: Box<dyn MarkdownRenderer>,
    highlighter: Option<Box<dyn CodeHighlighter>>,
    view: V,
}

impl<V: ContentView> PageContentLoader<V> {
    /// Create a loader with the given capabilities and view
    pub fn new(
        config: SiteConfig,
        fetcher: Box<dyn ContentFetcher>,
        renderer: Box<dyn MarkdownRenderer>,
        view: V,
    ) -> Self {
        Self {
            config,
            fetcher,
            renderer,
            highlighter: None,
            view,
        }
    }

    /// Attach a code highlighter; without one code blocks stay as rendered
    pub fn with_highlighter(mut self, highlighter: Box<dyn CodeHighlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Set the active navigation link for a page identifier
    pub fn set_active_navigation(&mut self, page: &str) {
        self.view.set_active_link(page);
    }

    /// Run the full page-open sequence for a URL path
    ///
    /// Sets the active navigation link, resolves the page against the page
    /// map, and loads the mapped content. An unmapped page leaves the
    /// container untouched.
    pub async fn open(&mut self, url_path: &str) {
        let page = resolve_current_page(url_path).to_string();
        self.set_active_navigation(&page);

        match self.config.pages.get(&page).cloned() {
            Some(key) => self.load_content(&key).await,
            None => debug!("no content mapped for page {:?}", page),
        }
    }

    /// Load one content file into the view
    ///
    /// Never propagates an error: failures are logged and surfaced through
    /// the view's error state, terminal for this load attempt.
    pub async fn load_content(&mut self, key: &str) {
        self.view.show_loading();

        match self.fetch_and_render(key).await {
            Ok(html) => self.view.show_content(&html),
            Err(e) => {
                error!("failed to load content {:?}: {}", key, e);
                self.view.show_error(&e.to_string());
            }
        }
    }

    async fn fetch_and_render(&self, key: &str) -> Result<String> {
        let resource = self.config.content_url(key);
        let markdown = self.fetcher.fetch_text(&resource).await?;
        let html = self.renderer.render(&markdown)?;

        Ok(match &self.highlighter {
            Some(highlighter) => highlighter.highlight_all(&html),
            None => html,
        })
    }
}
