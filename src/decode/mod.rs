//! Binarization and projector column correspondence.

mod binarize;
mod correspond;

pub use binarize::BitPlanes;
pub use correspond::{ColumnMap, DecodeError};
