//! Closed-form solutions of the six Dubins path families
//!
//! Each function works on a unit turning radius. `t` and `q` are the arc
//! angles of the first and last segment; `p` is the length of the middle
//! straight (CSC families) or the middle arc angle (CCC families).
//! A family returns `None` when its discriminant leaves the valid domain.

use std::f64::consts::PI;

use crate::path_planning::dubins::params::PathParams;
use crate::path_planning::dubins::path::{DubinsPath, PathType, Segment};
use crate::common::Pose2D;
use crate::utils::mod2pi;

/// Raw unit-radius solution of one path family
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) t: f64,
    pub(crate) p: f64,
    pub(crate) q: f64,
    pub(crate) path_type: PathType,
}

impl Candidate {
    /// Scale to physical units and attach the origin pose.
    ///
    /// Returns `None` for a non-positive total length.
    pub(crate) fn into_path(self, turning_radius: f64, origin: Pose2D) -> Option<DubinsPath> {
        let lengths = [
            self.t * turning_radius,
            self.p * turning_radius,
            self.q * turning_radius,
        ];
        let types = self.path_type.segment_types();
        let segments = [
            Segment::new(lengths[0], types[0]),
            Segment::new(lengths[1], types[1]),
            Segment::new(lengths[2], types[2]),
        ];
        let length = lengths.iter().sum::<f64>();
        // NaN fails this too
        if !(length > 0.0) {
            return None;
        }

        Some(DubinsPath::from_parts(self.path_type, segments, length, turning_radius, origin))
    }
}

pub(crate) fn lsl(pp: &PathParams) -> Option<Candidate> {
    let p_square = 2.0 + pp.d_square - 2.0 * pp.cos_alpha_minus_beta
        + 2.0 * pp.d * (pp.sin_alpha - pp.sin_beta);
    if p_square < 0.0 {
        return None;
    }

    let tmp = (pp.cos_beta - pp.cos_alpha).atan2(pp.d + pp.sin_alpha - pp.sin_beta);
    Some(Candidate {
        t: mod2pi(tmp - pp.alpha),
        p: p_square.sqrt(),
        q: mod2pi(pp.beta - tmp),
        path_type: PathType::LSL,
    })
}

pub(crate) fn rsr(pp: &PathParams) -> Option<Candidate> {
    let p_square = 2.0 + pp.d_square - 2.0 * pp.cos_alpha_minus_beta
        + 2.0 * pp.d * (pp.sin_beta - pp.sin_alpha);
    if p_square < 0.0 {
        return None;
    }

    let tmp = (pp.cos_alpha - pp.cos_beta).atan2(pp.d - pp.sin_alpha + pp.sin_beta);
    Some(Candidate {
        t: mod2pi(pp.alpha - tmp),
        p: p_square.sqrt(),
        q: mod2pi(tmp - pp.beta),
        path_type: PathType::RSR,
    })
}

pub(crate) fn lsr(pp: &PathParams) -> Option<Candidate> {
    let p_square = -2.0 + pp.d_square + 2.0 * pp.cos_alpha_minus_beta
        + 2.0 * pp.d * (pp.sin_alpha + pp.sin_beta);
    if p_square < 0.0 {
        return None;
    }

    let p = p_square.sqrt();
    let tmp = (-pp.cos_alpha - pp.cos_beta).atan2(pp.d + pp.sin_alpha + pp.sin_beta)
        - (-2.0_f64).atan2(p);
    Some(Candidate {
        t: mod2pi(tmp - pp.alpha),
        p,
        q: mod2pi(tmp - mod2pi(pp.beta)),
        path_type: PathType::LSR,
    })
}

pub(crate) fn rsl(pp: &PathParams) -> Option<Candidate> {
    let p_square = -2.0 + pp.d_square + 2.0 * pp.cos_alpha_minus_beta
        - 2.0 * pp.d * (pp.sin_alpha + pp.sin_beta);
    if p_square < 0.0 {
        return None;
    }

    let p = p_square.sqrt();
    let tmp = (pp.cos_alpha + pp.cos_beta).atan2(pp.d - pp.sin_alpha - pp.sin_beta)
        - (2.0_f64).atan2(p);
    Some(Candidate {
        t: mod2pi(pp.alpha - tmp),
        p,
        q: mod2pi(pp.beta - tmp),
        path_type: PathType::RSL,
    })
}

pub(crate) fn rlr(pp: &PathParams) -> Option<Candidate> {
    let tmp = (6.0 - pp.d_square + 2.0 * pp.cos_alpha_minus_beta
        + 2.0 * pp.d * (pp.sin_alpha - pp.sin_beta))
        / 8.0;
    if tmp.abs() > 1.0 {
        return None;
    }

    let phi = (pp.cos_alpha - pp.cos_beta).atan2(pp.d - pp.sin_alpha + pp.sin_beta);
    let p = mod2pi(2.0 * PI - tmp.acos());
    let t = mod2pi(pp.alpha - phi + mod2pi(p / 2.0));
    let q = mod2pi(pp.alpha - pp.beta - t + mod2pi(p));
    Some(Candidate { t, p, q, path_type: PathType::RLR })
}

pub(crate) fn lrl(pp: &PathParams) -> Option<Candidate> {
    let tmp = (6.0 - pp.d_square + 2.0 * pp.cos_alpha_minus_beta
        + 2.0 * pp.d * (pp.sin_beta - pp.sin_alpha))
        / 8.0;
    if tmp.abs() > 1.0 {
        return None;
    }

    let phi = (pp.cos_alpha - pp.cos_beta).atan2(pp.d + pp.sin_alpha - pp.sin_beta);
    let p = mod2pi(2.0 * PI - tmp.acos());
    let t = mod2pi(-pp.alpha - phi + p / 2.0);
    let q = mod2pi(mod2pi(pp.beta) - pp.alpha - t + mod2pi(p));
    Some(Candidate { t, p, q, path_type: PathType::LRL })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(goal: Pose2D) -> PathParams {
        PathParams::new(&Pose2D::origin(), &goal, 1.0)
    }

    #[test]
    fn test_lsl_behind_start() {
        let c = lsl(&params(Pose2D::new(-4.0, 0.0, 0.0))).unwrap();
        assert_abs_diff_eq!(c.t, PI, epsilon = 1e-9);
        assert_abs_diff_eq!(c.p, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.q, PI, epsilon = 1e-9);
        assert_eq!(c.path_type, PathType::LSL);
    }

    #[test]
    fn test_lsr_diagonal() {
        let c = lsr(&params(Pose2D::new(4.0, 4.0, 0.0))).unwrap();
        assert_abs_diff_eq!(c.t, 0.9272952180016123, epsilon = 1e-9);
        assert_abs_diff_eq!(c.p, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.q, 0.9272952180016123, epsilon = 1e-9);
    }

    #[test]
    fn test_rsl_diagonal() {
        let c = rsl(&params(Pose2D::new(4.0, -4.0, 0.0))).unwrap();
        assert_abs_diff_eq!(c.t, 0.9272952180016121, epsilon = 1e-9);
        assert_abs_diff_eq!(c.p, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.q, 0.9272952180016121, epsilon = 1e-9);
    }

    #[test]
    fn test_rsr_turnaround() {
        let c = rsr(&params(Pose2D::new(4.0, -4.0, PI))).unwrap();
        assert_abs_diff_eq!(c.t, 0.46364760900080604, epsilon = 1e-9);
        assert_abs_diff_eq!(c.p, 4.4721359549995805, epsilon = 1e-9);
        assert_abs_diff_eq!(c.q, 2.677945044588987, epsilon = 1e-9);
    }

    #[test]
    fn test_rlr_close_turnaround() {
        let c = rlr(&params(Pose2D::new(0.5, 0.0, PI))).unwrap();
        assert_abs_diff_eq!(c.t, 1.2743144002944586, epsilon = 1e-9);
        assert_abs_diff_eq!(c.p, 5.200264127924982, epsilon = 1e-9);
        assert_abs_diff_eq!(c.q, 0.7843570740407309, epsilon = 1e-9);
    }

    #[test]
    fn test_ccc_infeasible_when_far() {
        let pp = params(Pose2D::new(10.0, 0.0, 0.0));
        assert!(rlr(&pp).is_none());
        assert!(lrl(&pp).is_none());
    }

    #[test]
    fn test_lrl_feasible_when_close() {
        // Mirror image of the RLR case above
        let c = lrl(&params(Pose2D::new(0.5, 0.0, PI))).unwrap();
        assert!(c.p > PI);
        assert!(c.t >= 0.0 && c.q >= 0.0);
    }

    #[test]
    fn test_lsr_infeasible_for_overlapping_circles() {
        // Left circle of start and right circle of goal overlap
        let pp = params(Pose2D::new(0.0, 1.0, PI));
        assert!(lsr(&pp).is_none());
    }

    #[test]
    fn test_into_path_scales_by_radius() {
        let c = Candidate { t: 1.0, p: 2.0, q: 0.5, path_type: PathType::RLR };
        let path = c.into_path(3.0, Pose2D::origin()).unwrap();
        let lengths: Vec<f64> = path.segments().iter().map(|s| s.length).collect();
        assert_eq!(lengths, vec![3.0, 6.0, 1.5]);
        assert_abs_diff_eq!(path.length(), 10.5);
        assert_eq!(path.turning_radius(), 3.0);
    }

    #[test]
    fn test_into_path_rejects_zero_length() {
        let c = Candidate { t: 0.0, p: 0.0, q: 0.0, path_type: PathType::LSL };
        assert!(c.into_path(1.0, Pose2D::origin()).is_none());
    }

    #[test]
    fn test_into_path_rejects_nan_length() {
        let c = Candidate { t: 1.0, p: f64::NAN, q: 0.5, path_type: PathType::LSR };
        assert!(c.into_path(1.0, Pose2D::origin()).is_none());
    }
}
