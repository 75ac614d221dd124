//! Utility modules for dubins_planning

pub mod angle;
pub mod visualization;

pub use angle::mod2pi;
pub use visualization::{colors, PathStyle, Visualizer};
