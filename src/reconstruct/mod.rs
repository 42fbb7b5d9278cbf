//! Point cloud reconstruction from decoded correspondences.

mod cloud;
mod rig;
mod triangulate;

pub use cloud::{PointCloud, ScanPoint};
pub use rig::ScanRig;
pub use triangulate::intersect;

use crate::capture::FrameStack;
use crate::decode::ColumnMap;

/// Result of a reconstruction pass.
pub struct ReconstructionResult {
    pub cloud: PointCloud,
    /// Per camera pixel intersection Z, row-major (0.0 where invalid).
    pub depth: Vec<f32>,
}

/// Drives per-pixel triangulation over a decoded column map.
pub struct Reconstructor {
    rig: ScanRig,
    /// Points with any coordinate outside [-bound, bound] are discarded.
    bound: f32,
}

impl Reconstructor {
    pub fn new(rig: ScanRig, bound: f32) -> Self {
        Self { rig, bound }
    }

    /// Triangulate every valid camera pixel against its decoded projector
    /// column, coloring surviving points with the capture midrange color.
    pub fn reconstruct(&self, columns: &ColumnMap, stack: &FrameStack) -> ReconstructionResult {
        let mut cloud = PointCloud::default();
        let mut depth = vec![0.0f32; (columns.width * columns.height) as usize];

        for y in 0..columns.height {
            for x in 0..columns.width {
                let column = match columns.get(x, y) {
                    Some(c) => c,
                    None => continue,
                };

                let (origin, dir) = self.rig.camera_ray(x, y);
                let target = self.rig.projector_ray(column);
                let point = match intersect(origin, dir, target) {
                    Some(p) => p,
                    None => continue,
                };

                depth[(y * columns.width + x) as usize] = point.z;

                if point.x.abs() > self.bound
                    || point.y.abs() > self.bound
                    || point.z.abs() > self.bound
                {
                    continue;
                }

                cloud.points.push(ScanPoint {
                    position: point,
                    color: stack.midrange_color(x, y),
                });
            }
        }

        log::info!(
            "Reconstructed {} points from {} decoded pixels",
            cloud.len(),
            columns.valid_count()
        );

        ReconstructionResult { cloud, depth }
    }
}
