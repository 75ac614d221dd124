//! gnuplot rendering of sampled Dubins paths
//!
//! A [`Visualizer`] collects one or more sampled paths plus the start and
//! goal poses, each pose drawn as a marker with a short heading stroke.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{DubinsError, DubinsResult, Pose2D};

/// Hex colors used by the default styles
pub mod colors {
    pub const START: &str = "#00AA00";
    pub const GOAL: &str = "#0000FF";
    pub const PATH: &str = "#FF0000";
}

/// Length of the heading stroke drawn from a pose marker, in world units
const HEADING_LENGTH: f64 = 0.5;
const MARKER_SIZE: f64 = 1.5;

/// Line style of a sampled path
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub color: String,
    pub caption: String,
    pub line_width: f64,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self { color: color.to_string(), caption: caption.to_string(), line_width: 2.0 }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::PATH, "Dubins path")
    }
}

pub struct Visualizer {
    figure: Figure,
    title: Option<String>,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self { figure: Figure::new(), title: None, x_range: None, y_range: None }
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Draw the positions of `poses` as a polyline.
    pub fn plot_path(&mut self, poses: &[Pose2D], style: &PathStyle) -> &mut Self {
        let (xs, ys) = pose_xy(poses);
        self.figure.axes2d().lines(
            &xs,
            &ys,
            &[Caption(&style.caption), Color(&style.color), LineWidth(style.line_width)],
        );
        self
    }

    pub fn plot_start(&mut self, pose: &Pose2D) -> &mut Self {
        self.plot_pose(pose, colors::START, "Start")
    }

    pub fn plot_goal(&mut self, pose: &Pose2D) -> &mut Self {
        self.plot_pose(pose, colors::GOAL, "Goal")
    }

    fn plot_pose(&mut self, pose: &Pose2D, color: &str, caption: &str) -> &mut Self {
        let (tip_x, tip_y) = heading_tip(pose, HEADING_LENGTH);
        let axes = self.figure.axes2d();
        axes.points(
            &[pose.x],
            &[pose.y],
            &[Caption(caption), Color(color), PointSymbol('O'), PointSize(MARKER_SIZE)],
        );
        axes.lines(&[pose.x, tip_x], &[pose.y, tip_y], &[Color(color), LineWidth(2.0)]);
        self
    }

    /// Render the figure into a PNG of `width` x `height` pixels.
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> DubinsResult<()> {
        self.configure_axes();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| DubinsError::Visualization(e.to_string()))
    }

    fn configure_axes(&mut self) {
        let axes = self.figure.axes2d();
        if let Some(title) = &self.title {
            axes.set_title(title, &[]);
        }
        axes.set_x_label("x [m]", &[]);
        axes.set_y_label("y [m]", &[]);
        // Arcs only look circular on equal axis scales
        axes.set_aspect_ratio(AutoOption::Fix(1.0));

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

fn pose_xy(poses: &[Pose2D]) -> (Vec<f64>, Vec<f64>) {
    poses.iter().map(|p| (p.x, p.y)).unzip()
}

fn heading_tip(pose: &Pose2D, length: f64) -> (f64, f64) {
    (pose.x + length * pose.yaw.cos(), pose.y + length * pose.yaw.sin())
}
