//! Dubins path planner
//!
//! Shortest paths for a forward-only vehicle with a bounded turning radius
//! between two oriented poses. Every optimal path is one of six families
//! built from left arcs (L), right arcs (R) and straight lines (S):
//! LSL, LSR, RSL, RSR, RLR and LRL.
//!
//! ```
//! use dubins_planning::common::Pose2D;
//! use dubins_planning::path_planning::dubins::{shortest_path, PathType};
//!
//! let start = Pose2D::new(0.0, 0.0, 0.0);
//! let goal = Pose2D::new(4.0, 4.0, 0.0);
//!
//! let path = shortest_path(start, goal, 1.0).expect("reachable");
//! assert_eq!(path.path_type(), PathType::LSR);
//! assert!((path.length() - 5.854590436003225).abs() < 1e-9);
//!
//! let poses = path.interpolate(0.5);
//! assert_eq!(poses.len(), 12);
//! ```

pub mod params;
mod families;
mod path;

use log::{debug, trace};
use ordered_float::OrderedFloat;

use crate::common::{DubinsError, DubinsResult, PosePlanner, Pose2D};

pub use params::PathParams;
pub use path::{DubinsPath, PathType, Segment, SegmentType};

use families::Candidate;
use params::validate_turning_radius;

impl PathType {
    fn solve(self, params: &PathParams) -> Option<Candidate> {
        match self {
            PathType::LSL => families::lsl(params),
            PathType::LSR => families::lsr(params),
            PathType::RSL => families::rsl(params),
            PathType::RSR => families::rsr(params),
            PathType::RLR => families::rlr(params),
            PathType::LRL => families::lrl(params),
        }
    }
}

fn solve_family(
    params: &PathParams,
    path_type: PathType,
    start: Pose2D,
    turning_radius: f64,
) -> Option<DubinsPath> {
    let candidate = match path_type.solve(params) {
        Some(candidate) => candidate,
        None => {
            debug!(
                "{}: infeasible for alpha={} beta={} d={}",
                path_type, params.alpha, params.beta, params.d
            );
            return None;
        }
    };
    trace!("{}: t={} p={} q={}", path_type, candidate.t, candidate.p, candidate.q);

    let path = candidate.into_path(turning_radius, start);
    if path.is_none() {
        debug!("{}: rejected, length not positive", path_type);
    }
    path
}

/// Shortest Dubins path from `start` to `goal`.
///
/// Returns `None` when no family is feasible, which includes `start` and
/// `goal` being the same pose. Among equal-length paths the family whose
/// name sorts first wins.
///
/// # Panics
///
/// Panics if `turning_radius` is not finite and strictly positive.
pub fn shortest_path(start: Pose2D, goal: Pose2D, turning_radius: f64) -> Option<DubinsPath> {
    let best = all_paths(start, goal, turning_radius)
        .into_iter()
        .min_by_key(|path| (OrderedFloat(path.length()), path.path_type().as_str()));

    if let Some(ref path) = best {
        debug!("shortest path {} -> {}: {}", start, goal, path);
    }
    best
}

/// Every feasible Dubins path from `start` to `goal`, in no particular order.
///
/// # Panics
///
/// Panics if `turning_radius` is not finite and strictly positive.
pub fn all_paths(start: Pose2D, goal: Pose2D, turning_radius: f64) -> Vec<DubinsPath> {
    let params = PathParams::new(&start, &goal, turning_radius);
    if params.is_degenerate() {
        debug!("start and goal coincide at {}, no path", start);
        return Vec::new();
    }

    PathType::ALL
        .iter()
        .filter_map(|&path_type| solve_family(&params, path_type, start, turning_radius))
        .collect()
}

/// Dubins path of one specific family, if that family is feasible.
///
/// # Panics
///
/// Panics if `turning_radius` is not finite and strictly positive.
pub fn path_by_type(
    start: Pose2D,
    goal: Pose2D,
    turning_radius: f64,
    path_type: PathType,
) -> Option<DubinsPath> {
    let params = PathParams::new(&start, &goal, turning_radius);
    if params.is_degenerate() {
        debug!("start and goal coincide at {}, no path", start);
        return None;
    }

    solve_family(&params, path_type, start, turning_radius)
}

/// Configuration for the Dubins planner
#[derive(Debug, Clone, PartialEq)]
pub struct DubinsConfig {
    /// Minimum turning radius of the vehicle
    pub turning_radius: f64,
    /// Distance between consecutive poses of an interpolated path
    pub step_size: f64,
}

impl Default for DubinsConfig {
    fn default() -> Self {
        Self {
            turning_radius: 1.0,
            step_size: 0.1,
        }
    }
}

impl DubinsConfig {
    pub fn validate(&self) -> DubinsResult<()> {
        validate_turning_radius(self.turning_radius)?;
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(DubinsError::InvalidStepSize(self.step_size));
        }
        Ok(())
    }
}

/// Dubins planner bound to a validated configuration
///
/// Unlike the free functions, this never panics: bad configuration is
/// rejected by [`DubinsPlanner::new`], and a missing path is reported
/// as [`DubinsError::NoPath`].
#[derive(Debug, Clone)]
pub struct DubinsPlanner {
    config: DubinsConfig,
}

impl DubinsPlanner {
    /// Create a new Dubins planner
    pub fn new(config: DubinsConfig) -> DubinsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create with the default configuration and the given turning radius
    pub fn with_turning_radius(turning_radius: f64) -> DubinsResult<Self> {
        Self::new(DubinsConfig {
            turning_radius,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &DubinsConfig {
        &self.config
    }

    /// Path of one specific family
    pub fn plan_with_type(
        &self,
        start: Pose2D,
        goal: Pose2D,
        path_type: PathType,
    ) -> DubinsResult<DubinsPath> {
        path_by_type(start, goal, self.config.turning_radius, path_type)
            .ok_or(DubinsError::NoPath { start, goal })
    }

    /// All feasible paths, possibly empty
    pub fn candidates(&self, start: Pose2D, goal: Pose2D) -> Vec<DubinsPath> {
        all_paths(start, goal, self.config.turning_radius)
    }

    /// Shortest path interpolated with the configured step size
    pub fn plan_poses(&self, start: Pose2D, goal: Pose2D) -> DubinsResult<Vec<Pose2D>> {
        let path = self.plan(start, goal)?;
        Ok(path.interpolate(self.config.step_size))
    }
}

impl PosePlanner for DubinsPlanner {
    type Path = DubinsPath;

    fn plan(&self, start: Pose2D, goal: Pose2D) -> DubinsResult<DubinsPath> {
        shortest_path(start, goal, self.config.turning_radius)
            .ok_or(DubinsError::NoPath { start, goal })
    }
}
