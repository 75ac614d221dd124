//
// Dubins path planning demo.
//
// Computes the shortest Dubins path for a set of start/goal pairs,
// logs the result, and saves one plot per scenario.
//
// Run with RUST_LOG=debug to see every evaluated path family.

use std::f64::consts::PI;
use std::fs;

use log::{error, info};

use dubins_planning::path_planning::dubins::{DubinsConfig, DubinsPlanner};
use dubins_planning::utils::{PathStyle, Visualizer};
use dubins_planning::{DubinsResult, Pose2D, PosePlanner};

const OUTPUT_DIR: &str = "img/path_planning";

struct Scenario {
    name: &'static str,
    start: Pose2D,
    goal: Pose2D,
    /// Plot window as `[x_min, y_min, x_max, y_max]`
    bounds: [f64; 4],
}

impl Scenario {
    fn new(
        name: &'static str,
        start: (f64, f64, f64),
        goal: (f64, f64, f64),
        bounds: [f64; 4],
    ) -> Self {
        Self { name, start: start.into(), goal: goal.into(), bounds }
    }

    fn from_origin(name: &'static str, goal: (f64, f64, f64), bounds: [f64; 4]) -> Self {
        Self::new(name, (0.0, 0.0, 0.0), goal, bounds)
    }
}

fn scenarios() -> Vec<Scenario> {
    let diagonal = PI / 4.0;
    vec![
        Scenario::from_origin("(0, 0, 0) -> (-4, 0, 0)", (-4.0, 0.0, 0.0), [-6.0, -0.5, 2.0, 2.5]),
        Scenario::from_origin("(0, 0, 0) -> (4, 4, 0)", (4.0, 4.0, 0.0), [0.0, 0.0, 5.0, 4.0]),
        Scenario::from_origin("(0, 0, 0) -> (4, -4, 0)", (4.0, -4.0, 0.0), [0.0, -4.0, 5.0, 0.0]),
        Scenario::from_origin("(0, 0, 0) -> (-4, 4, 0)", (-4.0, 4.0, 0.0), [-6.0, 0.0, 2.0, 4.0]),
        Scenario::from_origin(
            "(0, 0, 0) -> (-4, -4, 0)",
            (-4.0, -4.0, 0.0),
            [-6.0, -4.0, 2.0, 0.0],
        ),
        Scenario::from_origin("(0, 0, 0) -> (4, 4, pi)", (4.0, 4.0, PI), [0.0, 0.0, 6.0, 4.0]),
        Scenario::from_origin("(0, 0, 0) -> (4, -4, pi)", (4.0, -4.0, PI), [0.0, -4.0, 6.0, 0.0]),
        Scenario::from_origin("(0, 0, 0) -> (0.5, 0, pi)", (0.5, 0.0, PI), [-1.0, -3.0, 5.0, 3.0]),
        Scenario::new(
            "(0, 0, pi/4) -> (4, 4, pi/4)",
            (0.0, 0.0, diagonal),
            (4.0, 4.0, diagonal),
            [0.0, 0.0, 5.0, 5.0],
        ),
        Scenario::new(
            "(4, 4, pi/4) -> (0, 0, pi/4)",
            (4.0, 4.0, diagonal),
            (0.0, 0.0, diagonal),
            [-3.0, -1.0, 5.0, 7.0],
        ),
    ]
}

fn run_scenario(planner: &DubinsPlanner, index: usize, scenario: &Scenario) -> DubinsResult<()> {
    let path = planner.plan(scenario.start, scenario.goal)?;
    let poses = path.interpolate(planner.config().step_size);

    info!("[{}] {}", scenario.name, path);
    info!("  end pose: {} ({} samples)", path.end_pose(), poses.len());

    let mut vis = Visualizer::new();
    vis.set_title(&format!(
        "Dubins path {}: length {:.2}, type {}",
        scenario.name,
        path.length(),
        path.path_type()
    ));
    let [x_min, y_min, x_max, y_max] = scenario.bounds;
    vis.set_x_range(x_min, x_max);
    vis.set_y_range(y_min, y_max);
    vis.plot_path(&poses, &PathStyle::default());
    vis.plot_start(&scenario.start);
    vis.plot_goal(&scenario.goal);

    let output_path = format!("{}/dubins_path{}.png", OUTPUT_DIR, index);
    vis.save_png(&output_path, 800, 800)?;
    info!("  plot saved to: {}", output_path);
    Ok(())
}

fn run() -> DubinsResult<usize> {
    let config = DubinsConfig {
        turning_radius: 1.0,
        step_size: 0.5,
    };
    let planner = DubinsPlanner::new(config)?;
    fs::create_dir_all(OUTPUT_DIR)?;

    let mut failures = 0;
    for (i, scenario) in scenarios().iter().enumerate() {
        if let Err(e) = run_scenario(&planner, i, scenario) {
            error!("[{}] {}", scenario.name, e);
            failures += 1;
        }
    }
    Ok(failures)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Dubins path planner start!!");

    match run() {
        Ok(0) => info!("Dubins path planner finish!!"),
        Ok(failures) => {
            error!("Dubins path planner finished with {} failed scenarios", failures);
            std::process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
