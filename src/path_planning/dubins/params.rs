//! Normalization of a pose pair into the unit-radius Dubins frame
//!
//! The goal is expressed relative to the line joining the two positions:
//! `alpha` and `beta` are the start and goal headings measured from that
//! line, and `d` is the distance between the positions in units of the
//! turning radius. Every path family works on these values only.

use crate::common::{DubinsError, DubinsResult, Pose2D};
use crate::utils::mod2pi;

/// Dimensionless parameters shared by the six path families
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathParams {
    pub(crate) alpha: f64,
    pub(crate) beta: f64,
    pub(crate) d: f64,

    pub(crate) sin_alpha: f64,
    pub(crate) sin_beta: f64,
    pub(crate) cos_alpha: f64,
    pub(crate) cos_beta: f64,
    pub(crate) cos_alpha_minus_beta: f64,
    pub(crate) d_square: f64,
}

impl PathParams {
    /// Normalize `start` and `goal` for the given turning radius.
    ///
    /// # Panics
    ///
    /// Panics if `turning_radius` is not finite and strictly positive.
    pub fn new(start: &Pose2D, goal: &Pose2D, turning_radius: f64) -> Self {
        match Self::try_new(start, goal, turning_radius) {
            Ok(params) => params,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible form of [`PathParams::new`].
    pub fn try_new(start: &Pose2D, goal: &Pose2D, turning_radius: f64) -> DubinsResult<Self> {
        validate_turning_radius(turning_radius)?;

        let dx = goal.x - start.x;
        let dy = goal.y - start.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let theta = if distance > 0.0 { mod2pi(dy.atan2(dx)) } else { 0.0 };

        let alpha = mod2pi(start.yaw - theta);
        let beta = mod2pi(goal.yaw - theta);
        let d = distance / turning_radius;

        Ok(PathParams {
            alpha,
            beta,
            d,
            sin_alpha: alpha.sin(),
            sin_beta: beta.sin(),
            cos_alpha: alpha.cos(),
            cos_beta: beta.cos(),
            cos_alpha_minus_beta: (alpha - beta).cos(),
            d_square: d * d,
        })
    }

    /// Start heading relative to the start-goal line, in `[0, 2π)`
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Goal heading relative to the start-goal line, in `[0, 2π)`
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Start-goal distance divided by the turning radius
    pub fn d(&self) -> f64 {
        self.d
    }

    /// True when start and goal coincide in position and heading.
    ///
    /// No path is reported for this case.
    pub fn is_degenerate(&self) -> bool {
        self.alpha == 0.0 && self.beta == 0.0 && self.d == 0.0
    }
}

pub(crate) fn validate_turning_radius(turning_radius: f64) -> DubinsResult<()> {
    if turning_radius.is_finite() && turning_radius > 0.0 {
        Ok(())
    } else {
        Err(DubinsError::InvalidTurningRadius(turning_radius))
    }
}
