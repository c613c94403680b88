//! Core data types shared by every module of the cleaning-robot simulator.
//!
//! ## Key Components
//!
//! - **TileType**: contents of a single grid cell
//! - **Direction**: the four cardinal moves the robot can attempt
//! - **CleaningMode**: closed set of selectable cleaning strategies
//! - **Point**: zero-based grid coordinate
//!
//! All shared types are serializable so run state can be exported as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// NOTE - Enum for all possible tile contents on the map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileType {
    Empty,         // NOTE - Traversable, nothing left to clean
    Dirt,          // NOTE - Ordinary dirt
    DifficultDirt, // NOTE - Dirt costing double battery to clean
    Obstacle,      // NOTE - Impassable cell
    Base,          // NOTE - Charging base, never re-entered mid-run
    Cleaned,       // NOTE - Cell the robot currently occupies
}

/// NOTE - Enum for the four cardinal movement directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// NOTE - Enum for selectable cleaning strategies; only wall-following is implemented
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleaningMode {
    WallFollow,
    Spiral,
    Random,
}

/// Zero-based grid coordinate, compared structurally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub column: i32,
    pub row: i32,
}

impl Point {
    pub fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.column, self.row)
    }
}

/// NOTE - Battery level a freshly docked robot starts with
pub const FULL_BATTERY: f32 = 100.0;

/// NOTE - Traversal stops at this floor to keep margin for the return trip
pub const RETURN_THRESHOLD: f32 = 51.0;

/// NOTE - Battery cost of a regular move, dirty or not
pub const STEP_COST: f32 = 1.0;

/// NOTE - Battery cost of a move onto difficult dirt
pub const DIFFICULT_DIRT_COST: f32 = 2.0;

/// NOTE - Default grid dimensions used by the shell
pub const DEFAULT_COLUMNS: i32 = 20;
pub const DEFAULT_ROWS: i32 = 10;
