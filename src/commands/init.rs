//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default configuration written by `init`
const CONFIG_SCAFFOLD: &str = r#"# mdpage configuration

title: My Site

# Content
content_root: md/
content_ext: md

# Page file name -> content key
pages:
  index.html: home
  news.html: news
  tweets.html: tweets

# Navigation
nav:
  - href: index.html
    label: Home
  - href: news.html
    label: News
  - href: tweets.html
    label: Tweets
nav_class: nav-link
navbar_class: navbar
container_class: markdown-content
nav_breakpoint: 768
"#;

const STYLE_SCAFFOLD: &str = r#".navbar {
  display: flex;
  gap: 1rem;
  padding: 1rem;
}

.nav-link {
  text-decoration: none;
  color: #444;
}

.nav-link.active {
  color: #000;
  font-weight: bold;
}

.markdown-content {
  max-width: 48rem;
  margin: 0 auto;
  padding: 1rem;
}

.loading-state {
  text-align: center;
  padding: 2rem;
}

.spinner {
  width: 2rem;
  height: 2rem;
  margin: 0 auto;
  border: 3px solid #eee;
  border-top-color: #888;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.error-message {
  padding: 2rem;
  border: 1px solid #c00;
  border-radius: 4px;
}
"#;

const HOME_SCAFFOLD: &str = r#"# Welcome

This is the home page. Edit `md/home.md` to change it.

```rust
fn main() {
    println!("Hello, mdpage!");
}
```
"#;

const NEWS_SCAFFOLD: &str = r#"# News

Nothing here yet. Edit `md/news.md` to add entries.
"#;

const TWEETS_SCAFFOLD: &str = r#"# Tweets

Nothing here yet. Edit `md/tweets.md` to add entries.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("md"))?;
    fs::create_dir_all(target_dir.join("css"))?;

    fs::write(target_dir.join("_config.yml"), CONFIG_SCAFFOLD)?;
    fs::write(target_dir.join("css/style.css"), STYLE_SCAFFOLD)?;

    for (file, title) in [
        ("index.html", "Home"),
        ("news.html", "News"),
        ("tweets.html", "Tweets"),
    ] {
        fs::write(target_dir.join(file), page_html(title))?;
    }

    fs::write(target_dir.join("md/home.md"), HOME_SCAFFOLD)?;
    fs::write(target_dir.join("md/news.md"), NEWS_SCAFFOLD)?;
    fs::write(target_dir.join("md/tweets.md"), TWEETS_SCAFFOLD)?;

    Ok(())
}

/// Static page shell carrying the navbar and the content container
fn page_html(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{}</title>
  <link rel="stylesheet" href="css/style.css">
</head>
<body>
  <nav class="navbar">
    <a class="nav-link" href="index.html">Home</a>
    <a class="nav-link" href="news.html">News</a>
    <a class="nav-link" href="tweets.html">Tweets</a>
  </nav>
  <main class="markdown-content"></main>
</body>
</html>
"#,
        title
    )
}
