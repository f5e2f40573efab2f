//! mdpage: a Markdown page loader, previewer and checker for static sites
//!
//! This crate reproduces what a markdown-driven static page does when it is
//! opened in a browser: resolve the current page from the URL path, fetch the
//! Markdown file backing it, render it to HTML, highlight code blocks, and
//! swap the result into the page's content container.

pub mod commands;
pub mod config;
pub mod content;
pub mod fetch;
pub mod loader;
pub mod server;
pub mod view;

use anyhow::Result;
use std::path::Path;

/// The main mdpage application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory of the site
    pub base_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site from a directory, loading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Scaffold the site directory
    pub fn init(&self) -> Result<()> {
        commands::init::init_site(&self.base_dir)
    }

    /// Fetch and render every mapped page
    pub async fn check(&self) -> Result<()> {
        commands::check::run(self).await
    }
}
