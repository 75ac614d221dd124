//! Common traits defining interfaces for planning algorithms

use crate::common::error::DubinsError;
use crate::common::types::Pose2D;

/// Trait for planners that connect two oriented poses
pub trait PosePlanner {
    /// Path representation produced by this planner
    type Path;

    /// Plan a path from start to goal
    fn plan(&self, start: Pose2D, goal: Pose2D) -> Result<Self::Path, DubinsError>;
}
