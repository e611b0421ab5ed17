mod api;
mod config;
mod error;
mod post;
mod prismic;
mod render;
mod site;

use std::error::Error;

use api::ContentClient;
use config::Config;
use log::info;
use site::build_site;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    config.init_logger();
    info!("# Prismic Blog #");
    info!("");

    info!("Connecting to {}", config.endpoint());
    let client = ContentClient::new(&config).connect().await?;
    info!("");

    tokio::fs::create_dir_all(config.output()).await?;
    let report = build_site(&config, &client).await?;

    info!("");
    info!("{} listed", report.listed);
    info!("{} regenerated", report.regenerated);
    info!("{} fresh", report.fresh);
    info!("{} failed", report.failed);
    info!("Site written to {}", config.output().display());
    Ok(())
}
