#![warn(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod archive;
mod config;
mod error;
mod fetch;
mod menu;
mod parse;

use crate::{archive::Archive, config::Config, error::Error};

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn logger_init() {
    pretty_env_logger::formatted_builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();
}

async fn run(config: &Config) -> Result<()> {
    let version = config.scraper_version;

    log::info!("{version} - Fetching {}", config.page_url);
    let client = fetch::make_client(config.request_timeout)?;
    let html = fetch::menu_page(&client, &config.page_url).await?;

    log::info!("{version} - Scraping {}", config.page_url);
    let scraped = parse::scrape_menu_page(&html, config.reference_year(), config.timezone);
    log::info!(
        "{version} - Scraping finished, {} days found",
        scraped.days.len()
    );
    if scraped.skipped > 0 {
        log::warn!("{version} - {} day section(s) skipped", scraped.skipped);
    }

    let report = Archive::new(config).save_days(&scraped.days).await?;
    log::info!(
        "{version} - Done: {} saved, {} up-to-date, {} failed",
        report.saved,
        report.skipped,
        report.failed
    );
    if report.failed > 0 {
        return Err(Error::Archive {
            failed: report.failed,
        });
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    logger_init();
    let config = Config::from_env()?;
    if let Err(e) = run(&config).await {
        log::error!("{} - {e}", config.scraper_version);
        return Err(e.into());
    }
    Ok(())
}
