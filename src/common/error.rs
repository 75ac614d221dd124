//! Error types for dubins_planning

use thiserror::Error;

use crate::common::types::Pose2D;

/// Main error type for Dubins path planning
#[derive(Debug, Error)]
pub enum DubinsError {
    /// Turning radius must be finite and strictly positive
    #[error("Invalid turning radius: {0} (must be greater than zero)")]
    InvalidTurningRadius(f64),
    /// Interpolation step must be finite and strictly positive
    #[error("Invalid step size: {0} (must be greater than zero)")]
    InvalidStepSize(f64),
    /// Path type name not in {LSL, LSR, RSL, RSR, RLR, LRL}
    #[error("Unknown path type: {0}")]
    UnknownPathType(String),
    /// No feasible Dubins path connects the two poses
    #[error("No Dubins path from {start} to {goal}")]
    NoPath { start: Pose2D, goal: Pose2D },
    /// Plot rendering failed
    #[error("Visualization error: {0}")]
    Visualization(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Dubins planning operations
pub type DubinsResult<T> = Result<T, DubinsError>;
