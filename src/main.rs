// Terminal shell for the cleaning-robot simulator.
// Parses arguments, runs the traversal with paced rendering, replays the
// return trip and prints the final summary.

use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use robovac::display::{self, Display};
use robovac::engine::{self, StepOutcome, Traversal, TraversalEnd};
use robovac::map::Map;
use robovac::report::RunReport;
use robovac::robot::{Placement, Robot};
use robovac::types::{CleaningMode, DEFAULT_COLUMNS, DEFAULT_ROWS, Point};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    WallFollow,
    Spiral,
    Random,
}

impl From<ModeArg> for CleaningMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::WallFollow => CleaningMode::WallFollow,
            ModeArg::Spiral => CleaningMode::Spiral,
            ModeArg::Random => CleaningMode::Random,
        }
    }
}

/// Autonomous cleaning-robot simulator.
#[derive(Parser)]
#[command(name = "robovac", version, about)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: i32,

    /// Seed for the run's random generator (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Start position as COL,ROW (random when omitted)
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Cleaning strategy; only wall-follow is implemented
    #[arg(long, value_enum, default_value_t = ModeArg::WallFollow)]
    mode: ModeArg,

    /// Pause between rendered frames, in milliseconds
    #[arg(long, default_value_t = 150)]
    delay_ms: u64,

    /// Print the final report as JSON instead of the plain summary
    #[arg(long)]
    json: bool,
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (column, row) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected COL,ROW, got '{raw}'"))?;
    let column = column.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let row = row.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(Point::new(column, row))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Reject unimplemented modes before anything is generated
    let mut traversal = match Traversal::for_mode(args.mode.into()) {
        Ok(traversal) => traversal,
        Err(error) => {
            display::log_error(&error.to_string());
            return Err(error.into());
        }
    };

    // One generator for the whole run, seeded once
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let placement = match args.start {
        Some(point) => Placement::Fixed(point),
        None => Placement::Random,
    };
    let base = match placement.resolve(args.columns, args.rows, &mut rng) {
        Ok(base) => base,
        Err(error) => {
            display::log_error(&error.to_string());
            return Err(error.into());
        }
    };

    let mut map = Map::generate(args.columns, args.rows, base, &mut rng)?;
    map.mark_base();
    let mut robot = Robot::new(base);

    let delay = Duration::from_millis(args.delay_ms);
    let started = Instant::now();

    let end = loop {
        Display::render(&map, &robot)?;
        thread::sleep(delay);
        match traversal.step(&mut robot, &mut map) {
            StepOutcome::Advanced => {}
            StepOutcome::Finished(end) => break end,
        }
    };
    let path_length = robot.visited_history.len();

    println!();
    match end {
        TraversalEnd::BatteryLow => display::log_info("Battery low, heading back to base."),
        TraversalEnd::Trapped => display::log_warn("Robot trapped: every neighbor is blocked."),
        TraversalEnd::Stalled => {
            display::log_warn("Robot stalled: no open move in the preferred directions.")
        }
    }
    thread::sleep(delay);

    engine::return_to_base(&mut robot, &mut map, |map, robot| {
        let _ = Display::render(map, robot);
        thread::sleep(delay);
    });
    Display::render(&map, &robot)?;

    let report = RunReport::build(&map, &robot, path_length, end, started.elapsed());
    println!();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &RunReport) {
    display::log_info(&format!(
        "Run over in {:.1}s on a {}x{} grid ({} obstacles, {} dirt cells).",
        report.elapsed_seconds,
        report.columns,
        report.rows,
        report.obstacle_count,
        report.dirt_count
    ));
    println!(
        "Cleaned {} cells | {}% of the dirt left over | battery at {:.1}",
        report.cleaned_cells, report.cleaned_percentage, report.battery_remaining
    );
    println!(
        "Path of {} cells | {} blocked attempts ({}%) | stop reason: {:?}",
        report.path_length, report.blocked_attempts, report.blocked_percentage, report.outcome
    );
}
