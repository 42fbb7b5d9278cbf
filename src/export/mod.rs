//! File export for patterns, debug rasters, and point clouds.

use std::fmt::Write as _;
use std::path::Path;

use crate::decode::{BitPlanes, ColumnMap};
use crate::reconstruct::PointCloud;

/// Writes scan artifacts to disk.
pub struct ScanExporter;

impl ScanExporter {
    /// Save one stripe pattern as an 8-bit grayscale PNG.
    pub fn export_pattern(data: &[u8], size: u32, path: &Path) -> std::io::Result<()> {
        let img = image::GrayImage::from_fn(size, size, |x, y| {
            image::Luma([data[(y * size + x) as usize]])
        });

        img.save(path)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Save every binarized bit plane to a directory as `bits_<level>.png`
    /// (1-based, matching the pattern filenames).
    pub fn export_bit_planes(planes: &BitPlanes, output_dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(output_dir)?;

        for (level, plane) in planes.planes.iter().enumerate() {
            let filename = format!("bits_{}.png", level + 1);
            let img = image::GrayImage::from_fn(planes.width, planes.height, |x, y| {
                let idx = (y * planes.width + x) as usize;
                image::Luma([if plane[idx] { 255 } else { 0 }])
            });

            img.save(output_dir.join(&filename))
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            log::info!("Exported bit plane: {}", filename);
        }

        Ok(())
    }

    /// Save the normalized column map, remapped from [-1, 1] to 8-bit
    /// (invalid pixels render black).
    pub fn export_column_map(columns: &ColumnMap, path: &Path) -> std::io::Result<()> {
        let img = image::GrayImage::from_fn(columns.width, columns.height, |x, y| {
            let idx = (y * columns.width + x) as usize;
            let value = if columns.valid[idx] {
                (columns.column[idx] + 1.0) / 2.0
            } else {
                0.0
            };
            image::Luma([(value * 255.0).clamp(0.0, 255.0) as u8])
        });

        img.save(path)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Save the depth map visualized as `-z / 3`, clamped to [0, 1].
    pub fn export_depth_map(
        depth: &[f32],
        width: u32,
        height: u32,
        path: &Path,
    ) -> std::io::Result<()> {
        let img = image::GrayImage::from_fn(width, height, |x, y| {
            let value = (-depth[(y * width + x) as usize] / 3.0).clamp(0.0, 1.0);
            image::Luma([(value * 255.0) as u8])
        });

        img.save(path)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Write the point cloud as an `.xyz` text file: a count line, a
    /// comment line, then one `x y z r g b` row per point with colors as
    /// normalized floats.
    pub fn export_xyz(cloud: &PointCloud, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut out = String::with_capacity(32 * (cloud.len() + 2));
        let _ = writeln!(out, "{}", cloud.len());
        let _ = writeln!(out, "comment");
        for point in &cloud.points {
            let _ = writeln!(
                out,
                "{} {} {} {} {} {}",
                point.position.x,
                point.position.y,
                point.position.z,
                point.color[0],
                point.color[1],
                point.color[2],
            );
        }

        std::fs::write(path, out)
    }
}
