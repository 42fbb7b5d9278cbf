//! Structured Light Scanner
//!
//! Entry point: generates the stripe pattern set, then reconstructs a
//! point cloud when captured frames are present.

use std::path::Path;

use structlight_scanner::config::ScanConfig;
use structlight_scanner::pipeline;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Structured light scanner starting...");

    if let Err(e) = run() {
        log::error!("Scan failed: {:#}", e);
        std::process::exit(1);
    }

    log::info!("Structured light scanner finished");
}

fn run() -> anyhow::Result<()> {
    let config = ScanConfig::load_or_default(Path::new("scan.json"))?;

    let written = pipeline::generate_patterns(&config)?;
    log::info!("Generated {} pattern(s)", written.len());

    if config.captures.dir.exists() {
        let summary = pipeline::reconstruct_scan(&config)?;
        log::info!(
            "Reconstruction complete: {} decoded pixel(s), {} point(s) in {:?}",
            summary.decoded_pixels,
            summary.point_count,
            summary.cloud_path
        );
    } else {
        log::info!(
            "No captures directory at {:?}, skipping reconstruction",
            config.captures.dir
        );
    }

    Ok(())
}
