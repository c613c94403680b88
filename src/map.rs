use rand::Rng;

use crate::error::SimulationError;
use crate::types::{Point, TileType};

pub struct Map {
    tiles: Vec<Vec<TileType>>,
    pub columns: i32,
    pub rows: i32,
    pub obstacle_count: u32,
    pub dirt_count: u32,
    pub base: Point,
}

/// Classify one uniform draw from [1, 100] into a tile. The obstacle check
/// runs first and masks both dirt moduli.
fn classify(value: u32) -> TileType {
    if value % 8 == 0 {
        TileType::Obstacle
    } else if value % 3 == 0 {
        TileType::Dirt
    } else if value % 10 == 0 {
        TileType::DifficultDirt
    } else {
        TileType::Empty
    }
}

impl Map {
    /// Generate a columns x rows map. The counters record the generated
    /// load and are never decremented afterwards, not even when `mark_base`
    /// overwrites a generated cell.
    pub fn generate<R: Rng>(
        columns: i32,
        rows: i32,
        base: Point,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        if columns <= 0 || rows <= 0 {
            return Err(SimulationError::InvalidDimensions { columns, rows });
        }
        let mut tiles = vec![vec![TileType::Empty; columns as usize]; rows as usize];
        let mut obstacle_count = 0;
        let mut dirt_count = 0;
        for row in tiles.iter_mut() {
            for tile in row.iter_mut() {
                *tile = classify(rng.gen_range(1..=100));
                match *tile {
                    TileType::Obstacle => obstacle_count += 1,
                    TileType::Dirt | TileType::DifficultDirt => dirt_count += 1,
                    _ => {}
                }
            }
        }
        let map = Self {
            tiles,
            columns,
            rows,
            obstacle_count,
            dirt_count,
            base,
        };
        if !map.contains(base) {
            return Err(SimulationError::OutOfBounds(base));
        }
        Ok(map)
    }

    pub fn contains(&self, position: Point) -> bool {
        position.column >= 0
            && position.column < self.columns
            && position.row >= 0
            && position.row < self.rows
    }

    /// Requires `contains(position)`; callers check first.
    pub fn tile_at(&self, position: Point) -> TileType {
        debug_assert!(
            self.contains(position),
            "tile_at({position}) outside {}x{} grid",
            self.columns,
            self.rows
        );
        self.tiles[position.row as usize][position.column as usize]
    }

    /// Requires `contains(position)`; callers check first.
    pub fn set_tile(&mut self, position: Point, tile: TileType) {
        debug_assert!(
            self.contains(position),
            "set_tile({position}) outside {}x{} grid",
            self.columns,
            self.rows
        );
        self.tiles[position.row as usize][position.column as usize] = tile;
    }

    /// Paint the base cell. Called once after generation; whatever the cell
    /// held before is overwritten, so the base is never an obstacle.
    pub fn mark_base(&mut self) {
        let base = self.base;
        self.set_tile(base, TileType::Base);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn classify_obstacle_wins_over_dirt() {
        assert_eq!(classify(8), TileType::Obstacle);
        // 24 satisfies the dirt modulus too; the obstacle check masks it
        assert_eq!(classify(24), TileType::Obstacle);
        assert_eq!(classify(80), TileType::Obstacle);
    }

    #[test]
    fn classify_dirt_wins_over_difficult_dirt() {
        assert_eq!(classify(3), TileType::Dirt);
        // 30 satisfies the difficult modulus too; ordering decides
        assert_eq!(classify(30), TileType::Dirt);
    }

    #[test]
    fn classify_difficult_dirt_and_empty() {
        assert_eq!(classify(10), TileType::DifficultDirt);
        assert_eq!(classify(1), TileType::Empty);
        assert_eq!(classify(7), TileType::Empty);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Map::generate(0, 5, Point::new(0, 0), &mut rng),
            Err(SimulationError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Map::generate(5, -1, Point::new(0, 0), &mut rng),
            Err(SimulationError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_base_outside_grid() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Map::generate(4, 4, Point::new(4, 0), &mut rng),
            Err(SimulationError::OutOfBounds(_))
        ));
    }

    #[test]
    fn mark_base_overwrites_the_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut map = Map::generate(6, 6, Point::new(2, 3), &mut rng).unwrap();
        map.mark_base();
        assert_eq!(map.tile_at(Point::new(2, 3)), TileType::Base);
    }

    proptest! {
        #[test]
        fn counters_partition_the_grid(
            columns in 1i32..32,
            rows in 1i32..32,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let map = Map::generate(columns, rows, Point::new(0, 0), &mut rng).unwrap();
            let mut obstacles = 0u32;
            let mut dirt = 0u32;
            let mut neither = 0u32;
            for row in 0..rows {
                for column in 0..columns {
                    match map.tile_at(Point::new(column, row)) {
                        TileType::Obstacle => obstacles += 1,
                        TileType::Dirt | TileType::DifficultDirt => dirt += 1,
                        _ => neither += 1,
                    }
                }
            }
            prop_assert_eq!(obstacles, map.obstacle_count);
            prop_assert_eq!(dirt, map.dirt_count);
            prop_assert_eq!(obstacles + dirt + neither, (columns * rows) as u32);
        }

        #[test]
        fn contains_matches_the_bounds(
            columns in 1i32..16,
            rows in 1i32..16,
            column in -4i32..20,
            row in -4i32..20,
        ) {
            let mut rng = StdRng::seed_from_u64(7);
            let map = Map::generate(columns, rows, Point::new(0, 0), &mut rng).unwrap();
            let inside = column >= 0 && column < columns && row >= 0 && row < rows;
            prop_assert_eq!(map.contains(Point::new(column, row)), inside);
        }
    }
}
