//! Cumulative savings and ROI projection

mod generator;
mod rows;

pub use generator::{generate_projection, DEFAULT_HORIZON_MONTHS};
pub use rows::{Projection, ProjectionRow, ProjectionSummary};
