use rand::Rng;

use crate::display;
use crate::error::SimulationError;
use crate::map::Map;
use crate::neighborhood::Neighbor;
use crate::types::{DIFFICULT_DIRT_COST, FULL_BATTERY, Point, STEP_COST, TileType};

/// How the shell asks for the robot to be placed.
pub enum Placement {
    Random,
    Fixed(Point),
}

impl Placement {
    /// Resolve to a concrete start position inside a columns x rows grid.
    pub fn resolve<R: Rng>(
        &self,
        columns: i32,
        rows: i32,
        rng: &mut R,
    ) -> Result<Point, SimulationError> {
        match *self {
            Placement::Random => Ok(Point::new(
                rng.gen_range(0..columns),
                rng.gen_range(0..rows),
            )),
            Placement::Fixed(point) => {
                if point.column >= 0 && point.column < columns && point.row >= 0 && point.row < rows
                {
                    Ok(point)
                } else {
                    Err(SimulationError::OutOfBounds(point))
                }
            }
        }
    }
}

pub struct Robot {
    pub battery: f32,
    pub cleaned_cells: u32,
    pub blocked_attempts: u32,
    /// Stack of every position successfully moved to. Top is the current
    /// position, bottom is the base. Never empty.
    pub visited_history: Vec<Point>,
}

impl Robot {
    pub fn new(base: Point) -> Self {
        Self {
            battery: FULL_BATTERY,
            cleaned_cells: 0,
            blocked_attempts: 0,
            visited_history: vec![base],
        }
    }

    pub fn position(&self) -> Point {
        *self
            .visited_history
            .last()
            .expect("visited history is never empty")
    }

    /// Linear scan of the whole history. Quadratic over a full run; fine at
    /// this grid scale.
    pub fn has_already_cleaned(&self, position: Point) -> bool {
        self.visited_history.iter().any(|visited| *visited == position)
    }

    /// Move onto `target`, cleaning whatever it holds.
    ///
    /// Blocked or out-of-grid targets are no-ops. On success the cell the
    /// robot just left is repainted first (the base stays a base, everything
    /// else becomes plain floor), the target becomes the occupied cell, the
    /// battery drains by the tile's cost and the position is pushed onto the
    /// history. A failed history growth skips the whole mutation, leaving
    /// battery, counters and map untouched.
    pub fn clean_cell(&mut self, target: &Neighbor, map: &mut Map) {
        if !map.contains(target.position) {
            return;
        }
        if target.blocked {
            return;
        }
        if let Err(error) = self.visited_history.try_reserve(1) {
            display::log_error(&SimulationError::HistoryAllocation(error).to_string());
            return;
        }
        self.update_last_point(map);
        let tile = map.tile_at(target.position);
        if matches!(tile, TileType::Dirt | TileType::DifficultDirt) {
            self.cleaned_cells += 1;
        }
        self.battery -= match tile {
            TileType::DifficultDirt => DIFFICULT_DIRT_COST,
            _ => STEP_COST,
        };
        map.set_tile(target.position, TileType::Cleaned);
        self.visited_history.push(target.position);
    }

    /// Repaint the cell under the robot before it leaves, or once it is
    /// parked at the end of the return trip.
    pub fn update_last_point(&self, map: &mut Map) {
        let current = self.position();
        if current == map.base {
            map.set_tile(current, TileType::Base);
        } else {
            map.set_tile(current, TileType::Empty);
        }
    }
}
