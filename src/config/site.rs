//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use percent_encoding::{percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Characters percent-encoded when a content key becomes a URL path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Content
    pub content_root: String,
    pub content_ext: String,

    // Page file name -> content key
    pub pages: IndexMap<String, String>,

    // Navigation
    pub nav: Vec<NavLinkConfig>,
    pub nav_class: String,
    pub navbar_class: String,
    pub container_class: String,

    // Viewport width at which the navbar switches to a horizontal layout
    pub nav_breakpoint: u32,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),

            content_root: "md/".to_string(),
            content_ext: "md".to_string(),

            pages: IndexMap::from([
                ("index.html".to_string(), "home".to_string()),
                ("news.html".to_string(), "news".to_string()),
                ("tweets.html".to_string(), "tweets".to_string()),
            ]),

            nav: vec![
                NavLinkConfig::new("index.html", "Home"),
                NavLinkConfig::new("news.html", "News"),
                NavLinkConfig::new("tweets.html", "Tweets"),
            ],
            nav_class: "nav-link".to_string(),
            navbar_class: "navbar".to_string(),
            container_class: "markdown-content".to_string(),

            nav_breakpoint: 768,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Site-relative path of the content file backing a content key
    ///
    /// # Examples
    /// ```ignore
    /// config.content_url("home") // -> "md/home.md"
    /// ```
    pub fn content_url(&self, key: &str) -> String {
        let root = self.content_root.trim_end_matches('/');
        let key = percent_encode(key.as_bytes(), SEGMENT).to_string();
        format!("{}/{}.{}", root, key, self.content_ext)
    }
}

/// A navigation link entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLinkConfig {
    pub href: String,
    pub label: String,
}

impl NavLinkConfig {
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}
