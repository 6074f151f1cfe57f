//! Board state for the wavegrid pathfinding engine.
//!
//! [`Board`] owns a fixed-size rectangular grid of [`Cell`]s with a
//! permanently walled border and exactly one start and one end cell.
//! Mutation follows a UI-driven best-effort model: requests that would
//! break an invariant are silent no-ops, never errors.

pub mod board;
pub mod geom;

pub use board::{Board, Cell};
pub use geom::Point;
