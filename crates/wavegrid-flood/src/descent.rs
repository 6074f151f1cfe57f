use wavegrid_core::Point;

use crate::field::DistanceField;

/// Reconstruct a start-to-end path by greedy descent over `field`.
///
/// Returns the empty vector when the start cell was never reached
/// (value `<= 0`), which covers both "walled off" and "flood capped
/// short of the start".
///
/// Otherwise the walk appends the current cell, stops once the end is
/// appended, and steps to the neighbor with the smallest strictly
/// positive value below the best seen so far. The best persists across
/// steps, so the walked values strictly decrease down to `1` at the
/// end cell. Unvisited cells (`0`) never qualify: a capped flood
/// leaves claimed-but-unwritten zeros next to the wavefront edge, and
/// stepping onto one would strand the walk short of the end. Ties
/// between equal-valued neighbors keep the first in the +x, -x, +y, -y
/// scan order, which makes path shape deterministic.
pub fn reconstruct(field: &DistanceField, start: Point, end: Point) -> Vec<Point> {
    let mut path = Vec::new();
    if field.at(start) <= 0 {
        return path;
    }

    let mut cur = start;
    let mut best = i32::MAX;
    loop {
        path.push(cur);
        if cur == end {
            break;
        }

        let mut next = cur;
        for np in cur.cardinals() {
            let v = field.at(np);
            if v >= 1 && v < best {
                best = v;
                next = np;
            }
        }
        if next == cur {
            // No downhill neighbor. Cannot happen on a field produced
            // by the flood; stop rather than spin.
            break;
        }
        cur = next;
    }
    path
}
