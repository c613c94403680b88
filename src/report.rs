//! # End-of-run reporting
//!
//! The shell consumes a `RunReport` once per run, either as a human-readable
//! recap or serialized to JSON. The report captures the generated load
//! (obstacles, dirt), what the robot actually did (cleaned cells, blocked
//! attempts, path length, remaining battery), why the run stopped, and the
//! derived percentages.
//!
//! ## Percentage formulas
//!
//! Both formulas are the program's historical ones, kept as-is:
//!
//! - `cleaned_percentage = 100 - cleaned_cells * 100 / dirt_count` — reads
//!   as the share of the generated dirt left over, so 0 means everything
//!   reachable was cleaned
//! - `blocked_percentage = blocked_attempts * 100 / (path_length / 2)`
//!
//! The divisions are guarded: a dirt-free grid reports 0 left over, and a
//! path too short to halve reports 0 blocked.

use std::time::Duration;

use serde::Serialize;

use crate::engine::TraversalEnd;
use crate::map::Map;
use crate::robot::Robot;

/// Final summary of a cleaning run.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use robovac::engine::TraversalEnd;
/// use robovac::map::Map;
/// use robovac::report::RunReport;
/// use robovac::robot::Robot;
/// use robovac::types::Point;
///
/// let mut rng = StdRng::seed_from_u64(9);
/// let map = Map::generate(8, 6, Point::new(0, 0), &mut rng).unwrap();
/// let robot = Robot::new(map.base);
/// let report = RunReport::build(&map, &robot, 1, TraversalEnd::Trapped, Duration::ZERO);
/// let json = serde_json::to_string(&report).unwrap();
/// assert!(json.contains("\"outcome\":\"Trapped\""));
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub columns: i32,
    pub rows: i32,
    pub obstacle_count: u32,
    pub dirt_count: u32,
    pub cleaned_cells: u32,
    pub blocked_attempts: u32,
    /// Length of the visited history when forward traversal stopped, before
    /// the return trip grows it further.
    pub path_length: usize,
    /// Battery at report time; after the return trip this may be negative.
    pub battery_remaining: f32,
    pub outcome: TraversalEnd,
    pub elapsed_seconds: f64,
    pub cleaned_percentage: u32,
    pub blocked_percentage: u32,
}

impl RunReport {
    pub fn build(
        map: &Map,
        robot: &Robot,
        path_length: usize,
        outcome: TraversalEnd,
        elapsed: Duration,
    ) -> Self {
        let cleaned_percentage = if map.dirt_count == 0 {
            0
        } else {
            100 - robot.cleaned_cells * 100 / map.dirt_count
        };
        let half_path = path_length as u32 / 2;
        let blocked_percentage = if half_path == 0 {
            0
        } else {
            robot.blocked_attempts * 100 / half_path
        };
        Self {
            columns: map.columns,
            rows: map.rows,
            obstacle_count: map.obstacle_count,
            dirt_count: map.dirt_count,
            cleaned_cells: robot.cleaned_cells,
            blocked_attempts: robot.blocked_attempts,
            path_length,
            battery_remaining: robot.battery,
            outcome,
            elapsed_seconds: elapsed.as_secs_f64(),
            cleaned_percentage,
            blocked_percentage,
        }
    }
}
