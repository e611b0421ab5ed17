pub mod locale;

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use dotenv::dotenv;

use locale::DateLocale;

/// How long a generated detail page stays fresh before it is fetched again (24h).
pub const REVALIDATE_SECONDS: u64 = 60 * 60 * 24;

#[derive(Debug, Clone, Parser)]
pub struct Config {
    /// Prismic API root, e.g. `https://your-repo.cdn.prismic.io/api/v2`
    #[clap(env = "PRISMIC_ENDPOINT")]
    endpoint: String,
    /// Access token for private repositories
    #[arg(long, env = "PRISMIC_ACCESS_TOKEN")]
    access_token: Option<String>,
    /// Which you path want to write the site to
    #[arg(short, long, default_value = "./dist", env = "OUTPUT")]
    output: PathBuf,
    /// Posts per listing page
    #[arg(long, default_value = "2")]
    page_size: u32,
    /// Maximum listing pages to load (first page included)
    #[arg(long)]
    pages: Option<usize>,
    /// Seconds a generated post page is considered fresh
    #[arg(long, default_value_t = REVALIDATE_SECONDS)]
    revalidate: u64,
    /// Locale used for publication dates
    #[arg(long, default_value = "pt_BR")]
    locale: DateLocale,
    /// Regenerate every post page
    #[arg(short, long)]
    force: bool,
    /// Retry budget for transient failures
    #[arg(long, default_value = "3")]
    retries: u32,
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Config {
    /// Parse the configuration from the environment and command line arguments
    pub fn parse() -> Self {
        dotenv().ok();
        <Self as Parser>::parse()
    }
    /// Create a logger with the configured verbosity level
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.verbose.log_level_filter())
            .format_target(false)
            .init();
    }
    /// API root without a trailing slash
    pub fn endpoint(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }
    pub const fn output(&self) -> &PathBuf {
        &self.output
    }
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
    pub const fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate)
    }
    pub const fn locale(&self) -> DateLocale {
        self.locale
    }
    pub const fn force(&self) -> bool {
        self.force
    }
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Whether another listing page may be loaded after `loaded` pages
    pub fn allow_page(&self, loaded: usize) -> bool {
        self.pages.map_or(true, |limit| loaded < limit)
    }
}

#[cfg(test)]
pub(crate) fn test_config(endpoint: &str, output: &std::path::Path) -> Config {
    let output = output.display().to_string();
    Config::try_parse_from([
        "prismic-blog",
        endpoint,
        "--output",
        output.as_str(),
        "--retries",
        "0",
    ])
    .unwrap()
}
