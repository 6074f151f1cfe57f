use rand::Rng;
use wavegrid_core::{Board, Point};

use crate::field::DistanceField;
use crate::solver::{FloodSolver, Solution};

/// Step cap used until the driver adjusts it.
pub const DEFAULT_STEP_CAP: i32 = 15;

/// Upper bound for the configurable step cap.
pub const MAX_STEP_CAP: i32 = 120;

/// One driver input, translated from whatever event source the
/// presentation layer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Flip the obstacle flag under the cursor.
    ToggleObstacle(Point),
    /// Relocate the start cell.
    SetStart(Point),
    /// Relocate the end cell.
    SetEnd(Point),
    /// Raise the step cap by one, saturating at [`MAX_STEP_CAP`].
    RaiseStepCap,
    /// Lower the step cap by one, saturating at zero.
    LowerStepCap,
    /// Re-run the solve. `limited` applies the configured step cap;
    /// otherwise the flood runs to completion.
    Recompute { limited: bool },
}

/// One interactive solving session: a board, a solver, the step-cap
/// setting, and the most recent solution.
///
/// This is the state the driver threads through its event loop instead
/// of process-wide globals. The board is only ever mutated between
/// solves; during a solve the solver holds it behind a shared borrow.
pub struct Session {
    board: Board,
    solver: FloodSolver,
    max_steps: i32,
    solution: Option<Solution>,
    needs_recompute: bool,
}

impl Session {
    /// Start a session on a fresh randomized board.
    pub fn new(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        Self::with_board(Board::new(width, height, rng))
    }

    /// Start a session on a prepared board.
    pub fn with_board(board: Board) -> Self {
        let solver = FloodSolver::new(board.width(), board.height());
        Self {
            board,
            solver,
            max_steps: DEFAULT_STEP_CAP,
            solution: None,
            needs_recompute: true,
        }
    }

    /// Apply one driver input.
    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::ToggleObstacle(p) => {
                self.board.toggle_obstacle(p);
                self.needs_recompute = true;
            }
            Edit::SetStart(p) => {
                if self.board.set_start(p) {
                    self.needs_recompute = true;
                }
            }
            Edit::SetEnd(p) => {
                if self.board.set_end(p) {
                    self.needs_recompute = true;
                }
            }
            Edit::RaiseStepCap => {
                self.max_steps = (self.max_steps + 1).min(MAX_STEP_CAP);
            }
            Edit::LowerStepCap => {
                self.max_steps = (self.max_steps - 1).max(0);
            }
            Edit::Recompute { limited } => self.recompute(limited),
        }
    }

    /// Re-run the solve against the current board.
    pub fn recompute(&mut self, limited: bool) {
        let cap = limited.then_some(self.max_steps);
        let start = self.board.start();
        let end = self.board.end();
        let solution = self.solver.solve(&self.board, start, end, cap);
        log::debug!(
            "solve {start} -> {end}, cap {cap:?}: {} path cells",
            solution.path.len()
        );
        self.solution = Some(solution);
        self.needs_recompute = false;
    }

    /// The board, for rendering and inspection.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The latest path, start to end inclusive. Empty when nothing has
    /// been solved yet or no route was found.
    pub fn path(&self) -> &[Point] {
        self.solution.as_ref().map_or(&[], |s| s.path.as_slice())
    }

    /// The latest distance field, if a solve has run.
    pub fn field(&self) -> Option<&DistanceField> {
        self.solution.as_ref().map(|s| &s.field)
    }

    /// The configured step cap, applied on limited recomputes.
    pub fn step_cap(&self) -> i32 {
        self.max_steps
    }

    /// Whether the board changed since the last solve.
    pub fn needs_recompute(&self) -> bool {
        self.needs_recompute
    }
}
