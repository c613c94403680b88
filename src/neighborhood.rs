use crate::map::Map;
use crate::types::{Point, TileType};

/// One cardinal neighbor of a probed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub position: Point,
    pub blocked: bool,
}

/// The four cardinal neighbors of a position, probed in one shot. A plain
/// value type: probing allocates nothing.
#[derive(Clone, Copy, Debug)]
pub struct Neighborhood {
    pub north: Neighbor,
    pub south: Neighbor,
    pub east: Neighbor,
    pub west: Neighbor,
}

impl Neighborhood {
    /// Probe the four neighbors of `position`. A neighbor is blocked when it
    /// falls outside the grid, holds an obstacle, or is the base (the base
    /// is never re-entered mid-run). Pure; the grid mutates on every move,
    /// so callers re-probe after each one.
    pub fn probe(map: &Map, position: Point, base: Point) -> Self {
        Self {
            north: probe_one(map, Point::new(position.column, position.row - 1), base),
            south: probe_one(map, Point::new(position.column, position.row + 1), base),
            east: probe_one(map, Point::new(position.column + 1, position.row), base),
            west: probe_one(map, Point::new(position.column - 1, position.row), base),
        }
    }

    pub fn fully_blocked(&self) -> bool {
        self.north.blocked && self.south.blocked && self.east.blocked && self.west.blocked
    }
}

fn probe_one(map: &Map, position: Point, base: Point) -> Neighbor {
    let blocked = !map.contains(position)
        || map.tile_at(position) == TileType::Obstacle
        || position == base;
    Neighbor { position, blocked }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn blank_map(columns: i32, rows: i32, base: Point) -> Map {
        let mut rng = StdRng::seed_from_u64(0);
        let mut map = Map::generate(columns, rows, base, &mut rng).unwrap();
        for row in 0..rows {
            for column in 0..columns {
                map.set_tile(Point::new(column, row), TileType::Empty);
            }
        }
        map.mark_base();
        map
    }

    #[test]
    fn corner_probe_blocks_outside_neighbors() {
        let map = blank_map(3, 3, Point::new(1, 1));
        let around = Neighborhood::probe(&map, Point::new(0, 0), map.base);
        assert!(around.north.blocked);
        assert!(around.west.blocked);
        assert!(!around.south.blocked);
        assert!(!around.east.blocked);
    }

    #[test]
    fn base_neighbor_is_blocked() {
        let map = blank_map(3, 3, Point::new(1, 1));
        let around = Neighborhood::probe(&map, Point::new(2, 1), map.base);
        assert!(around.west.blocked);
        assert!(around.east.blocked); // off the east edge
        assert!(!around.north.blocked);
        assert!(!around.south.blocked);
    }

    #[test]
    fn fully_blocked_needs_all_four() {
        let mut map = blank_map(3, 3, Point::new(0, 0));
        map.set_tile(Point::new(1, 0), TileType::Obstacle);
        map.set_tile(Point::new(1, 2), TileType::Obstacle);
        map.set_tile(Point::new(0, 1), TileType::Obstacle);
        map.set_tile(Point::new(2, 1), TileType::Obstacle);
        let around = Neighborhood::probe(&map, Point::new(1, 1), map.base);
        assert!(around.fully_blocked());
        let partially = Neighborhood::probe(&map, Point::new(2, 2), map.base);
        assert!(!partially.fully_blocked());
    }

    proptest! {
        #[test]
        fn open_neighbors_are_safe(
            seed in any::<u64>(),
            column in 0i32..12,
            row in 0i32..12,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let base = Point::new(0, 0);
            let map = Map::generate(12, 12, base, &mut rng).unwrap();
            let around = Neighborhood::probe(&map, Point::new(column, row), base);
            for neighbor in [around.north, around.south, around.east, around.west] {
                if !neighbor.blocked {
                    prop_assert!(map.contains(neighbor.position));
                    prop_assert_ne!(map.tile_at(neighbor.position), TileType::Obstacle);
                    prop_assert_ne!(neighbor.position, base);
                }
            }
        }
    }
}
