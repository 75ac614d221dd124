//! Dubins path representation and sampling

use std::fmt;
use std::str::FromStr;

use crate::common::{DubinsError, Pose2D};

/// Steering direction of a path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    Left,
    Straight,
    Right,
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            SegmentType::Left => 'L',
            SegmentType::Straight => 'S',
            SegmentType::Right => 'R',
        };
        write!(f, "{}", c)
    }
}

/// The six Dubins path families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    LSL,
    LSR,
    RSL,
    RSR,
    RLR,
    LRL,
}

impl PathType {
    /// Curve-straight-curve families
    pub const CSC: [PathType; 4] = [PathType::LSL, PathType::LSR, PathType::RSL, PathType::RSR];
    /// Curve-curve-curve families
    pub const CCC: [PathType; 2] = [PathType::RLR, PathType::LRL];
    /// Every family
    pub const ALL: [PathType; 6] = [
        PathType::LSL,
        PathType::LSR,
        PathType::RSL,
        PathType::RSR,
        PathType::RLR,
        PathType::LRL,
    ];

    /// Steering direction of each of the three segments
    pub const fn segment_types(self) -> [SegmentType; 3] {
        use SegmentType::{Left as L, Right as R, Straight as S};
        match self {
            PathType::LSL => [L, S, L],
            PathType::LSR => [L, S, R],
            PathType::RSL => [R, S, L],
            PathType::RSR => [R, S, R],
            PathType::RLR => [R, L, R],
            PathType::LRL => [L, R, L],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PathType::LSL => "LSL",
            PathType::LSR => "LSR",
            PathType::RSL => "RSL",
            PathType::RSR => "RSR",
            PathType::RLR => "RLR",
            PathType::LRL => "LRL",
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathType {
    type Err = DubinsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathType::ALL
            .iter()
            .copied()
            .find(|path_type| path_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DubinsError::UnknownPathType(s.to_string()))
    }
}

/// One of the three pieces of a Dubins path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Arc length in world units
    pub length: f64,
    pub segment_type: SegmentType,
}

impl Segment {
    pub fn new(length: f64, segment_type: SegmentType) -> Self {
        Self { length, segment_type }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.segment_type, self.length)
    }
}

/// A Dubins path anchored at its start pose
///
/// Segment lengths are in world units and always sum to `length()`,
/// which is strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct DubinsPath {
    path_type: PathType,
    segments: [Segment; 3],
    length: f64,
    turning_radius: f64,
    origin: Pose2D,
}

impl DubinsPath {
    pub(crate) fn from_parts(
        path_type: PathType,
        segments: [Segment; 3],
        length: f64,
        turning_radius: f64,
        origin: Pose2D,
    ) -> Self {
        Self { path_type, segments, length, turning_radius, origin }
    }

    /// Total length of the path
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn path_type(&self) -> PathType {
        self.path_type
    }

    pub fn segments(&self) -> &[Segment; 3] {
        &self.segments
    }

    pub fn turning_radius(&self) -> f64 {
        self.turning_radius
    }

    /// Start pose of the path
    pub fn origin(&self) -> Pose2D {
        self.origin
    }

    /// Pose reached at the end of the last segment
    pub fn end_pose(&self) -> Pose2D {
        self.sample(self.length)
    }

    /// Pose reached after travelling `distance` along the path.
    ///
    /// `distance` is clamped to `[0, length()]`.
    pub fn sample(&self, distance: f64) -> Pose2D {
        if distance <= 0.0 {
            return self.origin;
        }

        let mut remaining = distance.min(self.length);
        let mut pose = self.origin;

        for segment in &self.segments {
            let delta = remaining.min(segment.length);
            remaining -= delta;

            pose = state_at_distance(&pose, delta, segment.segment_type, self.turning_radius);

            if remaining <= 0.0 {
                break;
            }
        }

        pose
    }

    /// Sample the path every `step_size`, starting at the origin.
    ///
    /// Produces poses at `0, step_size, 2 * step_size, ...` up to `length()`.
    ///
    /// # Panics
    ///
    /// Panics if `step_size` is not finite and strictly positive.
    pub fn interpolate(&self, step_size: f64) -> Vec<Pose2D> {
        if !(step_size.is_finite() && step_size > 0.0) {
            panic!("{}", DubinsError::InvalidStepSize(step_size));
        }

        sample_distances(self.length, step_size)
            .map(|distance| self.sample(distance))
            .collect()
    }
}

/// Distances `i * step_size` for every `i` with `i * step_size <= length`.
fn sample_distances(length: f64, step_size: f64) -> impl DoubleEndedIterator<Item = f64> {
    let mut last = (length / step_size).floor() as u64;
    while last > 0 && last as f64 * step_size > length {
        last -= 1;
    }
    while (last + 1) as f64 * step_size <= length {
        last += 1;
    }

    (0..=last).map(move |i| i as f64 * step_size)
}

impl fmt::Display for DubinsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, {}, {}] length {}",
            self.path_type, self.segments[0], self.segments[1], self.segments[2], self.length
        )
    }
}

/// Advance `start` by `delta` along a segment of the given type.
fn state_at_distance(
    start: &Pose2D,
    delta: f64,
    segment_type: SegmentType,
    turning_radius: f64,
) -> Pose2D {
    if delta == 0.0 {
        return *start;
    }

    let r = turning_radius;
    let phi = delta / r;
    let (dx, dy, dyaw) = match segment_type {
        SegmentType::Left => (
            r * (start.yaw + phi).sin() - r * start.yaw.sin(),
            -r * (start.yaw + phi).cos() + r * start.yaw.cos(),
            phi,
        ),
        SegmentType::Right => (
            -r * (start.yaw - phi).sin() + r * start.yaw.sin(),
            r * (start.yaw - phi).cos() - r * start.yaw.cos(),
            -phi,
        ),
        SegmentType::Straight => (delta * start.yaw.cos(), delta * start.yaw.sin(), 0.0),
    };

    Pose2D::new(start.x + dx, start.y + dy, start.yaw + dyaw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn lsl_path(radius: f64) -> DubinsPath {
        // Quarter turn left, 2 straight, quarter turn left
        let arc = PI / 2.0 * radius;
        DubinsPath::from_parts(
            PathType::LSL,
            [
                Segment::new(arc, SegmentType::Left),
                Segment::new(2.0, SegmentType::Straight),
                Segment::new(arc, SegmentType::Left),
            ],
            2.0 * arc + 2.0,
            radius,
            Pose2D::origin(),
        )
    }

    #[test]
    fn test_segment_types_table() {
        use SegmentType::*;
        assert_eq!(PathType::LSL.segment_types(), [Left, Straight, Left]);
        assert_eq!(PathType::LSR.segment_types(), [Left, Straight, Right]);
        assert_eq!(PathType::RSL.segment_types(), [Right, Straight, Left]);
        assert_eq!(PathType::RSR.segment_types(), [Right, Straight, Right]);
        assert_eq!(PathType::RLR.segment_types(), [Right, Left, Right]);
        assert_eq!(PathType::LRL.segment_types(), [Left, Right, Left]);
    }

    #[test]
    fn test_path_type_parse() {
        assert_eq!("RLR".parse::<PathType>().unwrap(), PathType::RLR);
        assert_eq!(" lsr ".parse::<PathType>().unwrap(), PathType::LSR);
        assert!(matches!(
            "LLL".parse::<PathType>(),
            Err(DubinsError::UnknownPathType(ref name)) if name == "LLL"
        ));
        for path_type in PathType::ALL.iter() {
            assert_eq!(path_type.to_string().parse::<PathType>().unwrap(), *path_type);
        }
    }

    #[test]
    fn test_state_at_distance_left_quarter() {
        let pose = state_at_distance(&Pose2D::origin(), PI / 2.0 * 2.0, SegmentType::Left, 2.0);
        assert_abs_diff_eq!(pose.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pose.y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pose.yaw, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_state_at_distance_right_quarter() {
        let pose = state_at_distance(&Pose2D::origin(), PI / 2.0, SegmentType::Right, 1.0);
        assert_abs_diff_eq!(pose.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pose.y, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pose.yaw, -PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_state_at_distance_straight() {
        let start = Pose2D::new(1.0, 1.0, PI / 4.0);
        let pose = state_at_distance(&start, 2.0_f64.sqrt(), SegmentType::Straight, 5.0);
        assert_abs_diff_eq!(pose.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pose.y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pose.yaw, PI / 4.0);
    }

    #[test]
    fn test_sample_clamps_distance() {
        let path = lsl_path(1.0);
        assert_eq!(path.sample(0.0), path.origin());
        assert_eq!(path.sample(-3.0), path.origin());
        assert_eq!(path.sample(path.length() + 10.0), path.end_pose());
    }

    #[test]
    fn test_sample_walks_segments() {
        let path = lsl_path(1.0);
        let end = path.end_pose();
        // Up (1, 1) facing +y, straight to (1, 3), quarter left to (0, 4)
        assert_abs_diff_eq!(end.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.yaw, PI, epsilon = 1e-12);

        let mid = path.sample(PI / 2.0 + 1.0);
        assert_abs_diff_eq!(mid.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.yaw, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_count_and_spacing() {
        let path = lsl_path(1.0);
        let step = 0.25;
        let poses = path.interpolate(step);
        let expected = (path.length() / step).floor() as usize + 1;
        assert_eq!(poses.len(), expected);
        assert_eq!(poses[0], path.origin());
        assert_eq!(poses[3], path.sample(3.0 * step));
    }

    #[test]
    fn test_sample_distances_past_i32_range() {
        let mut distances = sample_distances(1e10, 1.0);
        assert_eq!(distances.next(), Some(0.0));
        assert_eq!(distances.next_back(), Some(1e10));
    }

    #[test]
    fn test_sample_distances_include_exact_length() {
        let distances: Vec<f64> = sample_distances(0.3, 0.1).collect();
        assert_eq!(distances.len(), 3);
        assert!(distances.iter().all(|&d| d <= 0.3));

        let distances: Vec<f64> = sample_distances(1.0, 0.25).collect();
        assert_eq!(distances, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_interpolate_step_longer_than_path() {
        let path = lsl_path(1.0);
        let poses = path.interpolate(path.length() * 2.0);
        assert_eq!(poses, vec![path.origin()]);
    }

    #[test]
    #[should_panic(expected = "Invalid step size")]
    fn test_interpolate_rejects_zero_step() {
        lsl_path(1.0).interpolate(0.0);
    }

    #[test]
    fn test_display() {
        let path = DubinsPath::from_parts(
            PathType::RSR,
            [
                Segment::new(1.0, SegmentType::Right),
                Segment::new(2.0, SegmentType::Straight),
                Segment::new(0.5, SegmentType::Right),
            ],
            3.5,
            1.0,
            Pose2D::origin(),
        );
        assert_eq!(path.to_string(), "RSR [R(1), S(2), R(0.5)] length 3.5");
    }
}
