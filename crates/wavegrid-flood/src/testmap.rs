//! A hand-built [`FloodMap`] for tests, independent of board rules.

use std::collections::HashSet;

use wavegrid_core::Point;

use crate::traits::FloodMap;

pub struct MazeMap {
    width: i32,
    height: i32,
    walls: HashSet<Point>,
}

impl MazeMap {
    /// An open map with a solid border ring, like a fresh board.
    pub fn bordered(width: i32, height: i32) -> Self {
        let mut walls = HashSet::new();
        for x in 0..width {
            walls.insert(Point::new(x, 0));
            walls.insert(Point::new(x, height - 1));
        }
        for y in 0..height {
            walls.insert(Point::new(0, y));
            walls.insert(Point::new(width - 1, y));
        }
        Self {
            width,
            height,
            walls,
        }
    }

    pub fn block(&mut self, p: Point) {
        self.walls.insert(p);
    }

    /// Wall off column `x` except for a single gap at `gap_y`.
    pub fn block_column(&mut self, x: i32, gap_y: i32) {
        for y in 0..self.height {
            if y != gap_y {
                self.walls.insert(Point::new(x, y));
            }
        }
    }
}

impl FloodMap for MazeMap {
    fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    fn blocked(&self, p: Point) -> bool {
        p.x < 0
            || p.x >= self.width
            || p.y < 0
            || p.y >= self.height
            || self.walls.contains(&p)
    }
}
