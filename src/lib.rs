//! dubins_planning - shortest paths for a vehicle with bounded turning radius
//!
//! This crate computes the six canonical Dubins paths (LSL, LSR, RSL, RSR,
//! RLR, LRL) between two oriented planar poses, selects the shortest one,
//! and samples poses along it.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, PosePlanner};
pub use common::{DubinsError, DubinsResult};
pub use path_planning::dubins::{
    all_paths, path_by_type, shortest_path, DubinsConfig, DubinsPath, DubinsPlanner, PathType,
    Segment, SegmentType,
};
