//! Scan pipeline orchestration.

use std::path::PathBuf;

use anyhow::Context;

use crate::capture::FrameStack;
use crate::config::ScanConfig;
use crate::decode::{BitPlanes, ColumnMap};
use crate::export::ScanExporter;
use crate::pattern::{StripeConfig, StripeGenerator};
use crate::reconstruct::{Reconstructor, ScanRig};

/// Statistics from a reconstruction run.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    /// Camera pixels with a valid column decode.
    pub decoded_pixels: usize,
    /// Points surviving triangulation and the bound filter.
    pub point_count: usize,
    /// Where the cloud was written.
    pub cloud_path: PathBuf,
}

/// Generate and save every stripe pattern level.
///
/// Returns the written paths in level order.
pub fn generate_patterns(config: &ScanConfig) -> anyhow::Result<Vec<PathBuf>> {
    let settings = &config.pattern;
    std::fs::create_dir_all(&settings.output_dir)
        .with_context(|| format!("creating output directory {:?}", settings.output_dir))?;

    let generator = StripeGenerator::new(StripeConfig::new(settings.size, settings.levels));
    let mut written = Vec::with_capacity(settings.levels as usize);

    for level in 0..settings.levels {
        let data = generator.generate_level(level);
        let path = settings.output_dir.join(format!("pattern_{}.png", level + 1));
        ScanExporter::export_pattern(&data, settings.size, &path)
            .with_context(|| format!("writing pattern {:?}", path))?;
        log::info!("Wrote pattern level {} to {:?}", level, path);
        written.push(path);
    }

    Ok(written)
}

/// Run the reconstruction half: load captures, binarize, decode the
/// projector column per pixel, triangulate, and export the point cloud
/// plus debug rasters.
pub fn reconstruct_scan(config: &ScanConfig) -> anyhow::Result<ScanSummary> {
    let stack = FrameStack::load(
        &config.captures.dir,
        &config.captures.stem,
        config.pattern.levels,
    )?;
    log::info!(
        "Loaded {} capture frame(s), {}x{}",
        stack.len(),
        stack.width,
        stack.height
    );

    let planes = BitPlanes::from_stack(&stack);
    let columns = ColumnMap::decode(&planes, config.pattern.levels, config.decode.contrast_threshold)?;
    log::info!("Decoded {} valid pixel(s)", columns.valid_count());

    let rig = ScanRig::new(&config.rig, stack.width, stack.height);
    let result = Reconstructor::new(rig, config.cloud.bound).reconstruct(&columns, &stack);

    if config.cloud.debug_images {
        let debug_dir = &config.cloud.debug_dir;
        ScanExporter::export_bit_planes(&planes, debug_dir)
            .with_context(|| format!("writing bit planes to {:?}", debug_dir))?;
        ScanExporter::export_column_map(&columns, &debug_dir.join("column_map.png"))
            .context("writing column map")?;
        ScanExporter::export_depth_map(
            &result.depth,
            columns.width,
            columns.height,
            &debug_dir.join("depth_map.png"),
        )
        .context("writing depth map")?;
    }

    ScanExporter::export_xyz(&result.cloud, &config.cloud.output_path)
        .with_context(|| format!("writing point cloud {:?}", config.cloud.output_path))?;
    log::info!(
        "Wrote {} point(s) to {:?}",
        result.cloud.len(),
        config.cloud.output_path
    );

    Ok(ScanSummary {
        decoded_pixels: columns.valid_count(),
        point_count: result.cloud.len(),
        cloud_path: config.cloud.output_path.clone(),
    })
}
