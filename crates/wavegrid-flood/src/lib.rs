//! Wavefront distance fields and greedy-descent path reconstruction.
//!
//! The solve runs in two stages:
//!
//! 1. [`FloodSolver::flood`] expands a uniform-cost wavefront outward
//!    from the end cell in discrete generations, producing a
//!    [`DistanceField`] where the end cell holds `1` and every reached
//!    free cell holds its distance ordinal. An optional generation cap
//!    bounds the expansion for partial lookahead.
//! 2. [`reconstruct`] walks from the start cell downhill over the
//!    field, always stepping to the smallest positive neighbor value,
//!    until the end cell is appended.
//!
//! [`Session`] packages a board, a solver, and the step-cap setting
//! behind the edit contract a presentation driver speaks.

mod descent;
mod field;
mod flood;
mod session;
mod solver;
#[cfg(test)]
mod testmap;
mod traits;

pub use descent::reconstruct;
pub use field::{DistanceField, OBSTACLE, UNVISITED};
pub use session::{DEFAULT_STEP_CAP, Edit, MAX_STEP_CAP, Session};
pub use solver::{FloodSolver, Solution};
pub use traits::FloodMap;
