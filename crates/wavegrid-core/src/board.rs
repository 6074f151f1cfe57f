//! The obstacle board and its invariant-preserving mutations.

use rand::{Rng, RngExt};

use crate::geom::Point;

/// One grid position.
///
/// `cost_factor` is a dormant extension point for weighted terrain: the
/// uniform flood never reads it, but it stays in the data model so a
/// priority-ordered expansion can be slotted in without a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub obstacle: bool,
    pub start: bool,
    pub end: bool,
    pub cost_factor: i32,
}

impl Cell {
    fn new(pos: Point, obstacle: bool) -> Self {
        Self {
            pos,
            obstacle,
            start: false,
            end: false,
            cost_factor: 1,
        }
    }
}

/// A fixed-size rectangular board of [`Cell`]s, row-major.
///
/// The border ring is permanently made of obstacles; exactly one
/// interior cell is the start and one the end at all times. All
/// invalid mutation requests are silent no-ops.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    start: Point,
    end: Point,
}

impl Board {
    /// Create a board with a walled border and start/end placed on two
    /// distinct interior cells chosen uniformly at random.
    ///
    /// # Panics
    ///
    /// Panics if the interior holds fewer than two cells; the smallest
    /// usable boards are 4x3 and 3x4.
    pub fn new(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        let interior = ((width - 2) as i64).max(0) * ((height - 2) as i64).max(0);
        assert!(
            interior >= 2,
            "board interior must hold at least two cells, got {width}x{height}"
        );

        let mut cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || x == width - 1 || y == 0 || y == height - 1;
                cells.push(Cell::new(Point::new(x, y), border));
            }
        }

        let mut pick = || {
            Point::new(
                rng.random_range(1..width - 1),
                rng.random_range(1..height - 1),
            )
        };
        let start = pick();
        let mut end = pick();
        while end == start {
            end = pick();
        }

        let mut board = Self {
            width,
            height,
            cells,
            start,
            end,
        };
        board.cell_mut(start).start = true;
        board.cell_mut(end).end = true;
        board
    }

    /// Board width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Board size as a point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Current start cell position.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Current end cell position.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// The cell at `p`, or `None` if out of range.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.contains(p).then(|| &self.cells[self.index(p)])
    }

    /// Whether `p` is an obstacle. Out-of-range positions count as blocked.
    pub fn is_obstacle(&self, p: Point) -> bool {
        match self.cell(p) {
            Some(c) => c.obstacle,
            None => true,
        }
    }

    /// Row-major iterator over `(Point, &Cell)`, for rendering.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        self.cells.iter().map(|c| (c.pos, c))
    }

    /// Flip the obstacle flag at `p`.
    ///
    /// No-op when `p` is the start or end cell, on the border, or out
    /// of range.
    pub fn toggle_obstacle(&mut self, p: Point) {
        if !self.contains(p) || self.on_border(p) {
            return;
        }
        let idx = self.index(p);
        let cell = &mut self.cells[idx];
        if cell.start || cell.end {
            return;
        }
        cell.obstacle = !cell.obstacle;
    }

    /// Move the start flag to `p`.
    ///
    /// Refused (returning `false`) when `p` is an obstacle, the end
    /// cell, already the start, or out of range. Returns `true` when
    /// the start moved, which means the distance field is stale.
    pub fn set_start(&mut self, p: Point) -> bool {
        let free = matches!(self.cell(p), Some(c) if !c.obstacle && !c.end && !c.start);
        if !free {
            return false;
        }
        let old = self.start;
        self.cell_mut(old).start = false;
        self.cell_mut(p).start = true;
        self.start = p;
        true
    }

    /// Move the end flag to `p`. Symmetric to [`Board::set_start`].
    pub fn set_end(&mut self, p: Point) -> bool {
        let free = matches!(self.cell(p), Some(c) if !c.obstacle && !c.start && !c.end);
        if !free {
            return false;
        }
        let old = self.end;
        self.cell_mut(old).end = false;
        self.cell_mut(p).end = true;
        self.end = p;
        true
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    #[inline]
    fn on_border(&self, p: Point) -> bool {
        p.x == 0 || p.x == self.width - 1 || p.y == 0 || p.y == self.height - 1
    }

    fn cell_mut(&mut self, p: Point) -> &mut Cell {
        let idx = self.index(p);
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(w: i32, h: i32) -> Board {
        Board::new(w, h, &mut StdRng::seed_from_u64(0xC0FFEE))
    }

    #[test]
    fn border_is_walled_interior_is_free() {
        let b = board(10, 8);
        for (p, cell) in b.iter() {
            let border = p.x == 0 || p.x == 9 || p.y == 0 || p.y == 7;
            assert_eq!(cell.obstacle, border, "at {p}");
        }
    }

    #[test]
    fn start_and_end_are_distinct_interior_cells() {
        for seed in 0..50 {
            let b = Board::new(6, 5, &mut StdRng::seed_from_u64(seed));
            let s = b.start();
            let e = b.end();
            assert_ne!(s, e);
            for p in [s, e] {
                assert!(p.x >= 1 && p.x <= 4 && p.y >= 1 && p.y <= 3, "{p}");
            }
            assert!(b.cell(s).unwrap().start);
            assert!(b.cell(e).unwrap().end);
        }
    }

    #[test]
    fn exactly_one_start_and_one_end() {
        let mut b = board(10, 8);
        b.set_start(Point::new(4, 4));
        b.set_end(Point::new(5, 5));
        let starts = b.iter().filter(|(_, c)| c.start).count();
        let ends = b.iter().filter(|(_, c)| c.end).count();
        assert_eq!(starts, 1);
        assert_eq!(ends, 1);
    }

    fn free_plain_cell(b: &Board) -> Point {
        b.iter()
            .find(|(_, c)| !c.obstacle && !c.start && !c.end)
            .map(|(p, _)| p)
            .unwrap()
    }

    #[test]
    fn toggle_flips_free_interior_cell() {
        let mut b = board(10, 8);
        let p = free_plain_cell(&b);
        assert!(!b.is_obstacle(p));
        b.toggle_obstacle(p);
        assert!(b.is_obstacle(p));
        b.toggle_obstacle(p);
        assert!(!b.is_obstacle(p));
    }

    #[test]
    fn toggle_ignores_start_end_border_and_oob() {
        let mut b = board(10, 8);
        let s = b.start();
        b.toggle_obstacle(s);
        assert!(!b.is_obstacle(s));
        let e = b.end();
        b.toggle_obstacle(e);
        assert!(!b.is_obstacle(e));
        b.toggle_obstacle(Point::new(0, 3));
        assert!(b.is_obstacle(Point::new(0, 3)));
        b.toggle_obstacle(Point::new(-1, 3));
        b.toggle_obstacle(Point::new(3, 100));
    }

    #[test]
    fn set_start_moves_flag_and_signals() {
        let mut b = board(10, 8);
        let old = b.start();
        let target = free_plain_cell(&b);
        assert!(b.set_start(target));
        assert_eq!(b.start(), target);
        assert!(!b.cell(old).unwrap().start);
        assert!(b.cell(target).unwrap().start);
    }

    #[test]
    fn set_start_refuses_obstacle_end_self_and_oob() {
        let mut b = board(10, 8);
        let start = b.start();
        assert!(!b.set_start(start), "already the start");
        assert!(!b.set_start(b.end()), "end cell");
        assert!(!b.set_start(Point::new(0, 0)), "border obstacle");
        assert!(!b.set_start(Point::new(42, 1)), "out of range");
        assert_eq!(b.start(), start);
    }

    #[test]
    fn set_end_refuses_obstacle_start_self_and_oob() {
        let mut b = board(10, 8);
        let end = b.end();
        assert!(!b.set_end(end), "already the end");
        assert!(!b.set_end(b.start()), "start cell");
        assert!(!b.set_end(Point::new(9, 7)), "border obstacle");
        assert!(!b.set_end(Point::new(-3, 0)), "out of range");
        assert_eq!(b.end(), end);
    }

    #[test]
    fn oob_counts_as_blocked() {
        let b = board(10, 8);
        assert!(b.is_obstacle(Point::new(-1, 0)));
        assert!(b.is_obstacle(Point::new(10, 0)));
        assert!(b.cell(Point::new(10, 0)).is_none());
    }

    #[test]
    fn cost_factor_defaults_to_one() {
        let b = board(6, 6);
        assert!(b.iter().all(|(_, c)| c.cost_factor == 1));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn board_round_trip() {
        let b = Board::new(8, 6, &mut StdRng::seed_from_u64(7));
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back.start(), b.start());
        assert_eq!(back.end(), b.end());
        assert_eq!(back.size(), b.size());
        assert!(back.iter().zip(b.iter()).all(|(a, b)| a.1 == b.1));
    }
}
