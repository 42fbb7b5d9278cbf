//! Projector column correspondence from accumulated bit planes.

use thiserror::Error;

use super::binarize::BitPlanes;

/// Errors that can occur during column decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("at least one pattern level is required")]
    NoLevels,
    #[error("expected {expected} bit planes, got {actual}")]
    PlaneCountMismatch { expected: usize, actual: usize },
}

/// Per-pixel decoded projector column.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// Camera frame dimensions.
    pub width: u32,
    pub height: u32,
    /// Normalized projector column in [-1, 1] (0.0 where invalid).
    pub column: Vec<f32>,
    /// Validity mask: false for never-lit, saturated, or low-contrast pixels.
    pub valid: Vec<bool>,
}

impl ColumnMap {
    /// Accumulate bit planes into a per-pixel column code and normalize it
    /// to [-1, 1].
    ///
    /// Level 0 carries the most significant bit. A pixel is rejected when
    /// its code is 0 (never lit), full scale (always lit, ambient or
    /// saturated), or its luminance contrast falls below
    /// `contrast_threshold` (0 disables the contrast test).
    pub fn decode(
        planes: &BitPlanes,
        levels: u32,
        contrast_threshold: f32,
    ) -> Result<Self, DecodeError> {
        if levels == 0 {
            return Err(DecodeError::NoLevels);
        }
        if planes.levels() != levels as usize {
            return Err(DecodeError::PlaneCountMismatch {
                expected: levels as usize,
                actual: planes.levels(),
            });
        }

        let pixel_count = (planes.width * planes.height) as usize;
        let full_scale = 2f32.powi(levels as i32) - 1.0;

        let mut column = vec![0.0f32; pixel_count];
        let mut valid = vec![false; pixel_count];

        for idx in 0..pixel_count {
            let mut code = 0.0f32;
            for level in 0..levels {
                if planes.planes[level as usize][idx] {
                    code += 2f32.powi((levels - 1 - level) as i32);
                }
            }

            if code == 0.0 || code >= full_scale || planes.contrast[idx] < contrast_threshold {
                continue;
            }

            column[idx] = 2.0 * code / full_scale - 1.0;
            valid[idx] = true;
        }

        Ok(Self {
            width: planes.width,
            height: planes.height,
            column,
            valid,
        })
    }

    /// Decoded column at a camera pixel, or None if invalid.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        let idx = (y * self.width + x) as usize;
        if self.valid[idx] {
            Some(self.column[idx])
        } else {
            None
        }
    }

    /// Count valid pixels.
    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }
}
