use std::fmt;

use wavegrid_core::Point;

/// Field value for obstacle or out-of-range cells.
pub const OBSTACLE: i32 = -1;

/// Field value for cells the wavefront has not reached.
///
/// The end cell is seeded to `1` rather than `0` so this sentinel stays
/// distinguishable from a real distance.
pub const UNVISITED: i32 = 0;

/// A dense distance-from-end map, rebuilt from scratch on every solve.
///
/// Row-major, one `i32` per grid cell: [`OBSTACLE`], [`UNVISITED`], or
/// a distance ordinal `>= 1` with the end cell at `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceField {
    width: i32,
    height: i32,
    values: Vec<i32>,
}

impl DistanceField {
    pub(crate) fn new(width: i32, height: i32, values: Vec<i32>) -> Self {
        debug_assert_eq!(values.len(), (width * height) as usize);
        Self {
            width,
            height,
            values,
        }
    }

    /// Field width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Field height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The value at `p`. Out-of-range positions read as [`OBSTACLE`].
    #[inline]
    pub fn at(&self, p: Point) -> i32 {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return OBSTACLE;
        }
        self.values[(p.y * self.width + p.x) as usize]
    }

    /// Row-major iterator over `(Point, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.values.iter().enumerate().map(|(i, &v)| {
            let p = Point::new(i as i32 % self.width, i as i32 / self.width);
            (p, v)
        })
    }
}

/// Renders the field as a table of values, for debug overlays.
impl fmt::Display for DistanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{:>4}", self.at(Point::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
