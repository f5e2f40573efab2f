//! View layer - owns the markup for the content container and the navbar
//!
//! The loader only ever talks to the [`ContentView`] trait, so tests can
//! substitute a recording view with no real markup involved.

use crate::config::SiteConfig;

/// Rendering surface driven by the page content loader
pub trait ContentView {
    /// Replace the container with a loading placeholder
    fn show_loading(&mut self);
    /// Replace the container with rendered content
    fn show_content(&mut self, html: &str);
    /// Replace the container with an error message
    fn show_error(&mut self, message: &str);
    /// Mark the navigation link whose target matches the page as active
    fn set_active_link(&mut self, page: &str);
}

/// Navigation bar layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAxis {
    Row,
    Column,
}

impl NavAxis {
    /// Axis for a viewport width; the breakpoint itself lays out horizontally
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width >= breakpoint {
            NavAxis::Row
        } else {
            NavAxis::Column
        }
    }

    fn css(&self) -> &'static str {
        match self {
            NavAxis::Row => "row",
            NavAxis::Column => "column",
        }
    }
}

/// A navigation link and its active state
#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

/// HTML-producing view backed by plain strings
pub struct HtmlView {
    nav: Vec<NavLink>,
    nav_class: String,
    navbar_class: String,
    container_class: String,
    axis: NavAxis,
    breakpoint: u32,
    container: String,
}

impl HtmlView {
    /// Create a view with the navigation links from the site configuration
    pub fn new(config: &SiteConfig) -> Self {
        let nav = config
            .nav
            .iter()
            .map(|link| NavLink {
                href: link.href.clone(),
                label: link.label.clone(),
                active: false,
            })
            .collect();

        Self {
            nav,
            nav_class: config.nav_class.clone(),
            navbar_class: config.navbar_class.clone(),
            container_class: config.container_class.clone(),
            axis: NavAxis::Row,
            breakpoint: config.nav_breakpoint,
            container: String::new(),
        }
    }

    /// Recompute the navbar axis for a viewport width
    pub fn resize(&mut self, width: u32) {
        self.axis = NavAxis::for_width(width, self.breakpoint);
    }

    pub fn axis(&self) -> NavAxis {
        self.axis
    }

    /// Current contents of the content container
    pub fn container_html(&self) -> &str {
        &self.container
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav
    }

    /// Render the navbar markup
    pub fn navbar_html(&self) -> String {
        let mut links = String::new();
        for link in &self.nav {
            let class = if link.active {
                format!("{} active", self.nav_class)
            } else {
                self.nav_class.clone()
            };
            let aria = if link.active {
                r#" aria-current="page""#
            } else {
                ""
            };
            links.push_str(&format!(
                "  <a class=\"{}\" href=\"{}\"{}>{}</a>\n",
                class,
                link.href,
                aria,
                html_escape(&link.label)
            ));
        }

        format!(
            "<nav class=\"{}\" style=\"flex-direction: {}\">\n{}</nav>",
            self.navbar_class,
            self.axis.css(),
            links
        )
    }

    /// Render the full fragment: navbar plus content container
    pub fn render_page(&self) -> String {
        format!(
            "{}\n<main class=\"{}\">\n{}\n</main>\n",
            self.navbar_html(),
            self.container_class,
            self.container
        )
    }
}

impl ContentView for HtmlView {
    fn show_loading(&mut self) {
        self.container = "<div class=\"loading-state\">\n  <div class=\"spinner\"></div>\n  <p>Loading content...</p>\n</div>"
            .to_string();
    }

    fn show_content(&mut self, html: &str) {
        self.container = html.to_string();
    }

    fn show_error(&mut self, message: &str) {
        self.container = format!(
            "<div class=\"error-message\">\n  <h3>⚠️ Failed to load content</h3>\n  <p>Error: {}</p>\n  <button onclick=\"location.reload()\">Reload</button>\n</div>",
            html_escape(message)
        );
    }

    fn set_active_link(&mut self, page: &str) {
        // At most one link ends up active
        let mut matched = false;
        for link in &mut self.nav {
            let is_active = !matched && link.href == page;
            if is_active {
                matched = true;
            }
            link.active = is_active;
        }
    }
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

    fn test_view() -> HtmlView {
        HtmlView::new(&SiteConfig::default())
    }

    #[test]
    fn test_set_active_link_marks_exactly_one() {
        let mut view = test_view();
        view.set_active_link("news.html");

        let active: Vec<_> = view.nav_links().iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "news.html");
    }

    #[test]
    fn test_set_active_link_clears_previous() {
        let mut view = test_view();
        view.set_active_link("news.html");
        view.set_active_link("tweets.html");

        let active: Vec<_> = view.nav_links().iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "tweets.html");
    }

    #[test]
    fn test_set_active_link_no_match_marks_none() {
        let mut view = test_view();
        view.set_active_link("about.html");
        assert!(view.nav_links().iter().all(|l| !l.active));
    }

    #[test]
    fn test_axis_breakpoint() {
        assert_eq!(NavAxis::for_width(500, 768), NavAxis::Column);
        assert_eq!(NavAxis::for_width(1024, 768), NavAxis::Row);
        // The breakpoint is inclusive of the horizontal layout
        assert_eq!(NavAxis::for_width(768, 768), NavAxis::Row);
    }

    #[test]
    fn test_resize_updates_navbar_markup() {
        let mut view = test_view();
        view.resize(500);
        assert!(view.navbar_html().contains("flex-direction: column"));
        view.resize(1024);
        assert!(view.navbar_html().contains("flex-direction: row"));
    }

    #[test]
    fn test_navbar_marks_active_link() {
        let mut view = test_view();
        view.set_active_link("news.html");

        let html = view.navbar_html();
        assert!(html.contains(r#"class="nav-link active" href="news.html" aria-current="page""#));
        // The other links carry neither marker
        assert!(html.contains(r#"class="nav-link" href="index.html">"#));
    }

    #[test]
    fn test_show_loading_markup() {
        let mut view = test_view();
        view.show_loading();
        assert!(view.container_html().contains("loading-state"));
        assert!(view.container_html().contains("spinner"));
        assert!(view.container_html().contains("Loading content..."));
    }

    #[test]
    fn test_show_error_escapes_message() {
        let mut view = test_view();
        view.show_error("<script>alert(1)</script>");
        assert!(view.container_html().contains("error-message"));
        assert!(view.container_html().contains("&lt;script&gt;"));
        assert!(!view.container_html().contains("<script>"));
    }

    #[test]
    fn test_show_content_replaces_container() {
        let mut view = test_view();
        view.show_loading();
        view.show_content("<h1>Hi</h1>");
        assert_eq!(view.container_html(), "<h1>Hi</h1>");
    }
}
