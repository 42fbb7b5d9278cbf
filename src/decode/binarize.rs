//! Per-pixel binarization against min/max luminance references.

use crate::capture::FrameStack;

/// Binarized capture stack: one bit plane per pattern level.
#[derive(Debug, Clone)]
pub struct BitPlanes {
    /// Camera frame dimensions.
    pub width: u32,
    pub height: u32,
    /// One plane per level, row-major, true = lit.
    pub planes: Vec<Vec<bool>>,
    /// Per-pixel luminance range (max - min) over the stack.
    pub contrast: Vec<f32>,
}

impl BitPlanes {
    /// Threshold every frame at the midpoint of the per-pixel luminance
    /// range over the whole stack.
    ///
    /// A pixel under a lit stripe in some frames and a dark stripe in
    /// others separates cleanly at (min + max) / 2; pixels the projector
    /// never reaches end up with near-zero contrast.
    pub fn from_stack(stack: &FrameStack) -> Self {
        let width = stack.width;
        let height = stack.height;
        let pixel_count = (width * height) as usize;
        let levels = stack.len();

        let mut min_luma = vec![1.0f32; pixel_count];
        let mut max_luma = vec![0.0f32; pixel_count];
        for frame in 0..levels {
            for y in 0..height {
                for x in 0..width {
                    let idx = (y * width + x) as usize;
                    let v = stack.luma(frame, x, y);
                    min_luma[idx] = min_luma[idx].min(v);
                    max_luma[idx] = max_luma[idx].max(v);
                }
            }
        }

        let mut planes = Vec::with_capacity(levels);
        for frame in 0..levels {
            let mut plane = vec![false; pixel_count];
            for y in 0..height {
                for x in 0..width {
                    let idx = (y * width + x) as usize;
                    let threshold = 0.5 * (min_luma[idx] + max_luma[idx]);
                    plane[idx] = stack.luma(frame, x, y) > threshold;
                }
            }
            planes.push(plane);
        }

        let contrast = min_luma
            .iter()
            .zip(&max_luma)
            .map(|(lo, hi)| hi - lo)
            .collect();

        Self {
            width,
            height,
            planes,
            contrast,
        }
    }

    /// Number of bit planes (one per pattern level).
    pub fn levels(&self) -> usize {
        self.planes.len()
    }

    pub fn bit(&self, level: usize, x: u32, y: u32) -> bool {
        self.planes[level][(y * self.width + x) as usize]
    }
}
