use wavegrid_core::{Board, Point};

/// The solver's view of a grid: a size and an obstacle predicate.
///
/// The flood reads obstacle layout through this trait only, so any map
/// representation can feed it. Borrowing the map immutably for the
/// duration of a solve also guarantees the layout cannot shift while
/// the field is being written.
pub trait FloodMap {
    /// Grid size (width = x, height = y).
    fn size(&self) -> Point;

    /// Whether `p` blocks the wavefront. Out-of-range must be blocked.
    fn blocked(&self, p: Point) -> bool;
}

impl FloodMap for Board {
    fn size(&self) -> Point {
        Board::size(self)
    }

    fn blocked(&self, p: Point) -> bool {
        self.is_obstacle(p)
    }
}
