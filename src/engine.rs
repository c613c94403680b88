use serde::Serialize;

use crate::error::SimulationError;
use crate::map::Map;
use crate::neighborhood::{Neighbor, Neighborhood};
use crate::robot::Robot;
use crate::types::{CleaningMode, Direction, RETURN_THRESHOLD};

/// Why a traversal stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TraversalEnd {
    /// Battery fell to the return threshold.
    BatteryLow,
    /// All four neighbors of the current position are blocked.
    Trapped,
    /// No move was open in the registered direction and no switch rule
    /// applied; the next iteration would repeat verbatim.
    Stalled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    Finished(TraversalEnd),
}

/// Greedy wall-following traversal. A single directional register and no
/// lookahead: decisions use only immediate-neighbor openness plus the
/// revisit scan of the history.
pub struct Traversal {
    next_move: Direction,
}

impl Traversal {
    /// Gate on the selected mode. Only wall-following is implemented; the
    /// shell rejects everything else before a run starts.
    pub fn for_mode(mode: CleaningMode) -> Result<Self, SimulationError> {
        match mode {
            CleaningMode::WallFollow => Ok(Self {
                next_move: Direction::East,
            }),
            other => Err(SimulationError::ModeNotImplemented(other)),
        }
    }

    pub fn next_move(&self) -> Direction {
        self.next_move
    }

    /// One full loop iteration: battery floor check, entrapment check, then
    /// the directional dispatch (move, re-probe, switch rules).
    pub fn step(&mut self, robot: &mut Robot, map: &mut Map) -> StepOutcome {
        if robot.battery <= RETURN_THRESHOLD {
            return StepOutcome::Finished(TraversalEnd::BatteryLow);
        }
        let position = robot.position();
        let around = Neighborhood::probe(map, position, map.base);
        if around.fully_blocked() {
            return StepOutcome::Finished(TraversalEnd::Trapped);
        }
        let before = (position, self.next_move);
        match self.next_move {
            Direction::East => self.drive_east(robot, map, around),
            Direction::South => self.drive_south(robot, map, around),
            Direction::West => self.drive_west(robot, map, around),
            Direction::North => self.drive_north(robot, map, around),
        }
        if (robot.position(), self.next_move) == before {
            // identical inputs next iteration; stop instead of spinning
            return StepOutcome::Finished(TraversalEnd::Stalled);
        }
        StepOutcome::Advanced
    }

    /// Drive to completion without rendering.
    pub fn run(&mut self, robot: &mut Robot, map: &mut Map) -> TraversalEnd {
        loop {
            if let StepOutcome::Finished(end) = self.step(robot, map) {
                return end;
            }
        }
    }

    fn drive_east(&mut self, robot: &mut Robot, map: &mut Map, around: Neighborhood) {
        let around = advance(robot, map, around, around.east);
        if around.east.blocked && !around.south.blocked {
            self.next_move = Direction::South;
            robot.blocked_attempts += 1;
        } else if !around.west.blocked
            && !robot.has_already_cleaned(around.west.position)
            && around.east.blocked
        {
            self.next_move = Direction::West;
        } else if robot.has_already_cleaned(around.west.position) && !around.north.blocked {
            self.next_move = Direction::North;
        } else if !around.west.blocked && around.east.blocked {
            self.next_move = Direction::West;
            robot.blocked_attempts += 1;
        }
    }

    fn drive_south(&mut self, robot: &mut Robot, map: &mut Map, around: Neighborhood) {
        let around = advance(robot, map, around, around.south);
        if !around.east.blocked {
            self.next_move = Direction::East;
        } else if !around.west.blocked {
            self.next_move = Direction::West;
        }
    }

    fn drive_west(&mut self, robot: &mut Robot, map: &mut Map, around: Neighborhood) {
        let around = advance(robot, map, around, around.west);
        if around.west.blocked && !around.south.blocked {
            self.next_move = Direction::South;
            robot.blocked_attempts += 1;
        } else if !around.east.blocked && around.west.blocked {
            self.next_move = Direction::East;
            robot.blocked_attempts += 1;
        }
    }

    fn drive_north(&mut self, robot: &mut Robot, map: &mut Map, around: Neighborhood) {
        let around = advance(robot, map, around, around.north);
        if !around.east.blocked {
            self.next_move = Direction::East;
        } else if !around.west.blocked {
            self.next_move = Direction::West;
        }
    }
}

/// Move onto `ahead` when it is open and re-probe from the new position;
/// otherwise keep the standing neighborhood for the switch rules.
fn advance(robot: &mut Robot, map: &mut Map, around: Neighborhood, ahead: Neighbor) -> Neighborhood {
    if ahead.blocked {
        return around;
    }
    robot.clean_cell(&ahead, map);
    Neighborhood::probe(map, robot.position(), map.base)
}

/// Walk the visited history backward, repainting the trail exactly as the
/// forward traversal painted it, until the robot is parked on the base. No
/// battery floor applies here: the battery keeps draining and may end below
/// zero. `on_frame` runs after every replay step so the shell can render.
pub fn return_to_base<F>(robot: &mut Robot, map: &mut Map, mut on_frame: F)
where
    F: FnMut(&Map, &Robot),
{
    let path = robot.visited_history.clone();
    for position in path.into_iter().rev() {
        let step = Neighbor {
            position,
            blocked: false,
        };
        robot.clean_cell(&step, map);
        on_frame(map, robot);
    }
    // the top of the history is the base again; put its marker back
    robot.update_last_point(map);
}
