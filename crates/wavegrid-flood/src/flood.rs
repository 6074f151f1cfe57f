use wavegrid_core::Point;

use crate::FloodSolver;
use crate::field::{DistanceField, OBSTACLE, UNVISITED};
use crate::traits::FloodMap;

impl FloodSolver {
    /// Compute a distance field from `end` over `map`.
    ///
    /// Expansion is generational: every cell reached at the same
    /// distance is written in one pass, then its unvisited neighbors
    /// (scanned +x, -x, +y, -y) form the next frontier at `d + 1`,
    /// deduplicated by linear index. The end cell is seeded to `1`.
    ///
    /// `cap` bounds the number of generations: `None` floods every
    /// reachable cell, `Some(k)` stops after `k` generations and leaves
    /// the rest at [`UNVISITED`] (`Some(0)` writes nothing at all, not
    /// even the seed).
    pub fn flood<M: FloodMap>(&mut self, map: &M, end: Point, cap: Option<i32>) -> DistanceField {
        self.fit(map.size());

        let mut values = vec![UNVISITED; self.width * self.height];
        for (idx, v) in values.iter_mut().enumerate() {
            if map.blocked(self.point(idx)) {
                *v = OBSTACLE;
            }
        }

        let mut frontier = std::mem::take(&mut self.frontier);
        let mut next = std::mem::take(&mut self.next);
        frontier.clear();

        if let Some(ei) = self.idx(end) {
            // A blocked end can only come from a foreign map; the board
            // invariants never allow it.
            if values[ei] == UNVISITED {
                frontier.push((ei, 1));
            }
        }

        let mut generations = 0;
        while !frontier.is_empty() && cap.is_none_or(|k| generations < k) {
            generations += 1;
            self.stamp = self.stamp.wrapping_add(1);
            let stamp = self.stamp;

            next.clear();
            for &(ci, d) in &frontier {
                values[ci] = d;
                for np in self.point(ci).cardinals() {
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    // Unvisited, not an obstacle, and not yet claimed
                    // this generation.
                    if values[ni] == UNVISITED && self.claimed[ni] != stamp {
                        self.claimed[ni] = stamp;
                        next.push((ni, d + 1));
                    }
                }
            }
            std::mem::swap(&mut frontier, &mut next);
        }

        log::debug!(
            "flood from {end}: {generations} generations, frontier left {}",
            frontier.len()
        );

        self.frontier = frontier;
        self.next = next;
        DistanceField::new(self.width as i32, self.height as i32, values)
    }
}
