//! Structured Light Scanner
//!
//! A pipeline for structured-light 3D scanning:
//! - Binary stripe projection patterns, one per frequency level
//! - Per-pixel binarization of camera captures against min/max luminance
//! - Projector column correspondence from accumulated bit planes
//! - Camera/projector ray intersection and .xyz point cloud export

pub mod capture;
pub mod config;
pub mod decode;
pub mod export;
pub mod pattern;
pub mod pipeline;
pub mod reconstruct;
