//! Camera capture loading.
//!
//! Loads the stack of frames captured while each stripe pattern was
//! projected, and exposes the per-pixel measurements reconstruction needs.

use std::path::{Path, PathBuf};

use image::RgbImage;
use thiserror::Error;

/// Errors that can occur while loading capture frames.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("capture stack cannot be empty")]
    Empty,
    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("frame {index} is {width}x{height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        index: usize,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },
}

/// An ordered stack of capture frames, one per pattern level.
pub struct FrameStack {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    frames: Vec<RgbImage>,
}

impl FrameStack {
    /// Load `count` frames named `<stem>_1.png` .. `<stem>_<count>.png`
    /// from a directory.
    pub fn load(dir: &Path, stem: &str, count: u32) -> Result<Self, CaptureError> {
        if count == 0 {
            return Err(CaptureError::Empty);
        }

        let mut frames = Vec::with_capacity(count as usize);
        for i in 0..count {
            let path = dir.join(format!("{}_{}.png", stem, i + 1));
            log::info!("Loading {}", path.display());
            let frame = image::open(&path)
                .map_err(|source| CaptureError::Load {
                    path: path.clone(),
                    source,
                })?
                .to_rgb8();
            frames.push(frame);
        }

        Self::from_frames(frames)
    }

    /// Build a stack from already-decoded frames.
    pub fn from_frames(frames: Vec<RgbImage>) -> Result<Self, CaptureError> {
        let first = frames.first().ok_or(CaptureError::Empty)?;
        let width = first.width();
        let height = first.height();

        for (index, frame) in frames.iter().enumerate() {
            if frame.width() != width || frame.height() != height {
                return Err(CaptureError::DimensionMismatch {
                    index,
                    width: frame.width(),
                    height: frame.height(),
                    expected_width: width,
                    expected_height: height,
                });
            }
        }

        Ok(Self {
            width,
            height,
            frames,
        })
    }

    /// Number of frames in the stack.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Equal-weight grayscale of one frame's pixel, in [0, 1].
    pub fn luma(&self, frame: usize, x: u32, y: u32) -> f32 {
        let p = self.frames[frame].get_pixel(x, y);
        (p[0] as f32 + p[1] as f32 + p[2] as f32) / (3.0 * 255.0)
    }

    /// Midrange color over the stack: per channel (min + max) / 2, in [0, 1].
    ///
    /// Approximates the half-lit surface color, since each pixel spends
    /// part of the sequence under a lit stripe and part under a dark one.
    pub fn midrange_color(&self, x: u32, y: u32) -> [f32; 3] {
        let mut min = [1.0f32; 3];
        let mut max = [0.0f32; 3];

        for frame in &self.frames {
            let p = frame.get_pixel(x, y);
            for c in 0..3 {
                let v = p[c] as f32 / 255.0;
                min[c] = min[c].min(v);
                max[c] = max[c].max(v);
            }
        }

        [
            0.5 * (min[0] + max[0]),
            0.5 * (min[1] + max[1]),
            0.5 * (min[2] + max[2]),
        ]
    }
}
