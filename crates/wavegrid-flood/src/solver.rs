use wavegrid_core::Point;

use crate::descent::reconstruct;
use crate::field::DistanceField;
use crate::traits::FloodMap;

/// One solve's output: the distance field and the reconstructed path.
///
/// Freshly owned per invocation; the path is empty when no route from
/// start to end exists within the flooded region.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub field: DistanceField,
    pub path: Vec<Point>,
}

/// Wavefront flood solver.
///
/// Owns the frontier buffers and the claim-stamp array so repeated
/// solves reuse their allocations. The distance field itself is built
/// fresh on every call and handed to the caller.
pub struct FloodSolver {
    pub(crate) width: usize,
    pub(crate) height: usize,
    // Frontier double-buffer: (linear index, distance) per entry.
    pub(crate) frontier: Vec<(usize, i32)>,
    pub(crate) next: Vec<(usize, i32)>,
    // Per-generation dedup set keyed by linear index. A slot belongs to
    // the current generation iff it carries the current stamp.
    pub(crate) claimed: Vec<u32>,
    pub(crate) stamp: u32,
}

impl FloodSolver {
    /// Create a solver sized for a `width x height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width: w,
            height: h,
            frontier: Vec::new(),
            next: Vec::new(),
            claimed: vec![0; w * h],
            stamp: 0,
        }
    }

    /// Flood then reconstruct in one call.
    pub fn solve<M: FloodMap>(
        &mut self,
        map: &M,
        start: Point,
        end: Point,
        cap: Option<i32>,
    ) -> Solution {
        let field = self.flood(map, end, cap);
        let path = reconstruct(&field, start, end);
        Solution { field, path }
    }

    /// Adopt the map's dimensions, growing the claim array if needed.
    ///
    /// A smaller map reuses the existing allocation; stale stamps are
    /// harmless because every generation bumps the stamp.
    pub(crate) fn fit(&mut self, size: Point) {
        let w = size.x.max(0) as usize;
        let h = size.y.max(0) as usize;
        self.width = w;
        self.height = h;
        if w * h > self.claimed.len() {
            self.claimed.clear();
            self.claimed.resize(w * h, 0);
            self.stamp = 0;
        }
    }

    /// Convert a point to a linear index. `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x as usize >= self.width || p.y < 0 || p.y as usize >= self.height {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a linear index back to a point.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
