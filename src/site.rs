use std::{
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use log::{debug, error, info, warn};
use maud::Markup;

use crate::{
    api::ContentClient,
    config::Config,
    error::BlogError,
    post::{load_more, merge_page, page_file_name, DetailState, PostPage, PostSummary},
    render::{render_detail, render_listing},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub listed: usize,
    pub regenerated: usize,
    pub fresh: usize,
    pub failed: usize,
}

/// Load the first page and keep merging while a cursor and the page budget remain.
pub async fn load_listing(config: &Config, client: &ContentClient) -> Result<PostPage, BlogError> {
    let first = client.list_content(config.page_size(), None).await?;
    let mut page = merge_page(&PostPage::default(), &first.results, first.next_page)?;
    let mut loaded = 1;
    info!(" + page 1: {} posts", page.items.len());

    while page.has_more() && config.allow_page(loaded) {
        match load_more(client, &page).await {
            Ok(next) => {
                loaded += 1;
                info!(" + page {}: {} posts", loaded, next.items.len() - page.items.len());
                page = next;
            }
            Err(e) => {
                // keep what was merged so far
                error!(" + failed to load page {}: {}", loaded + 1, e);
                break;
            }
        }
    }

    if page.has_more() {
        info!(" + more posts remain after {} pages", loaded);
    }
    Ok(page)
}

/// Whether `path` was written less than `revalidate` ago.
pub fn is_fresh(path: &Path, revalidate: Duration, now: SystemTime) -> bool {
    let Ok(modified) = path.metadata().and_then(|meta| meta.modified()) else {
        return false;
    };
    match now.duration_since(modified) {
        Ok(age) => age < revalidate,
        // written "in the future", clock skew
        Err(_) => true,
    }
}

/// Output path of a post page.
pub fn post_path(output: &Path, id: &str) -> PathBuf {
    output.join("post").join(page_file_name(id))
}

async fn write_page(path: &Path, markup: Markup) -> Result<(), BlogError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, markup.into_string()).await?;
    debug!("Wrote {}", path.display());
    Ok(())
}

async fn build_post(
    config: &Config,
    client: &ContentClient,
    post: &PostSummary,
) -> Result<(), BlogError> {
    let id = post.id.as_str();
    let found = client.get_content(id, post.id_kind).await?;
    let state = DetailState::resolve(found.as_ref())?;

    match &state {
        DetailState::Ready(detail) => {
            debug!("   {} min read", detail.reading_time_minutes());
        }
        DetailState::NotFound => warn!(" + {} was not found", id),
        DetailState::Loading => {}
    }

    let path = post_path(config.output(), id);
    write_page(&path, render_detail(&state, config.locale())).await
}

/// Write the listing and every listed post that is due for regeneration.
pub async fn build_site(config: &Config, client: &ContentClient) -> Result<BuildReport, BlogError> {
    info!("Loading posts");
    let page = load_listing(config, client).await?;
    let mut report = BuildReport {
        listed: page.items.len(),
        ..Default::default()
    };

    write_page(
        &config.output().join("index.html"),
        render_listing(&page, config.locale()),
    )
    .await?;
    info!("");

    info!("Building posts");
    let now = SystemTime::now();
    for post in &page.items {
        let path = post_path(config.output(), &post.id);
        if !config.force() && is_fresh(&path, config.revalidate(), now) {
            debug!(" + {} is fresh", post.id);
            report.fresh += 1;
            continue;
        }

        info!(" + {}", post.title);
        match build_post(config, client, post).await {
            Ok(()) => report.regenerated += 1,
            Err(e) => {
                error!(" + failed: {}", e);
                report.failed += 1;
            }
        }
    }

    write_page(
        &config.output().join("post").join("fallback.html"),
        render_detail(&DetailState::Loading, config.locale()),
    )
    .await?;

    Ok(report)
}
