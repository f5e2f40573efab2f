//! Verify that every mapped page's content loads and renders

use anyhow::{bail, Result};

use crate::content::{CmarkRenderer, MarkdownRenderer};
use crate::fetch::{ContentFetcher, FileFetcher};
use crate::Site;

/// Fetch and render the content file behind every entry in the page map
pub async fn run(site: &Site) -> Result<()> {
    let fetcher = FileFetcher::new(&site.base_dir);
    let renderer = CmarkRenderer::new();

    let mut failed = 0;

    for (page, key) in &site.config.pages {
        let resource = site.config.content_url(key);
        match load_one(&fetcher, &renderer, &resource).await {
            Ok(_) => println!("✅ {} -> {}", page, resource),
            Err(e) => {
                println!("❌ {} -> {}: {}", page, resource, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} pages failed to load",
            failed,
            site.config.pages.len()
        );
    }

    Ok(())
}

async fn load_one(
    fetcher: &FileFetcher,
    renderer: &CmarkRenderer,
    resource: &str,
) -> Result<String> {
    let markdown = fetcher.fetch_text(resource).await?;
    renderer.render(&markdown)
}
