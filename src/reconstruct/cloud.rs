//! Point cloud container.

use glam::Vec3;

/// One reconstructed surface point with its sampled color.
#[derive(Debug, Clone, Copy)]
pub struct ScanPoint {
    pub position: Vec3,
    /// Normalized RGB in [0, 1].
    pub color: [f32; 3],
}

/// Reconstructed point cloud.
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    pub points: Vec<ScanPoint>,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
