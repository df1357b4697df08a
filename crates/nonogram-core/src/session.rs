use log::warn;

use crate::grid::{Cell, CellColor, Grid};

/// Lifecycle of one puzzle. The transition is one-way: once the player
/// grid's clue signature matches the solution's, the session stays Solved
/// until it is replaced by a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Solved,
}

/// One play-through of a puzzle: the hidden solution, the board the player
/// toggles, a cosmetic per-cell color overlay, and the solution's clues,
/// derived once at creation.
///
/// The session exclusively owns its grids; everything outside reads them
/// through the accessors and mutates them only through [`toggle_cell`] and
/// [`reveal_solution`].
///
/// [`toggle_cell`]: PuzzleSession::toggle_cell
/// [`reveal_solution`]: PuzzleSession::reveal_solution
#[derive(Clone, Debug)]
pub struct PuzzleSession {
    solution: Grid,
    player: Grid,
    colors: Grid<CellColor>,
    row_clues: Vec<Vec<usize>>,
    column_clues: Vec<Vec<usize>>,
    state: SessionState,
}

impl PuzzleSession {
    /// Start a session on a freshly randomized solution.
    pub fn new(width: usize, height: usize) -> Self {
        let mut solution = Grid::empty(width, height);
        solution.randomize();
        Self::with_solution(solution)
    }

    /// Start a session on a caller-supplied solution pattern.
    ///
    /// An entirely empty solution has the same clue signature as the
    /// untouched player grid, so such a session legally starts out Solved.
    pub fn with_solution(solution: Grid) -> Self {
        let row_clues = solution.row_clues();
        let column_clues = solution.column_clues();
        let player = Grid::empty(solution.width(), solution.height());
        let colors = Grid::new(solution.width(), solution.height(), CellColor::DEFAULT);
        let mut session = Self {
            solution,
            player,
            colors,
            row_clues,
            column_clues,
            state: SessionState::InProgress,
        };
        session.check_solved();
        session
    }

    pub fn width(&self) -> usize {
        self.player.width()
    }

    pub fn height(&self) -> usize {
        self.player.height()
    }

    /// The board the player mutates; all cells start Empty.
    pub fn player(&self) -> &Grid {
        &self.player
    }

    /// Per-cell display colors, consulted when rendering a solved or
    /// revealed board.
    pub fn color_overlay(&self) -> &Grid<CellColor> {
        &self.colors
    }

    /// The solution's row clues, one list per row, top to bottom.
    pub fn row_clues(&self) -> &[Vec<usize>] {
        &self.row_clues
    }

    /// The solution's column clues, one list per column, left to right.
    pub fn column_clues(&self) -> &[Vec<usize>] {
        &self.column_clues
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Cycle the player cell at `(x, y)`: Empty -> Filled -> Crossed -> Empty,
    /// then re-evaluate the win condition.
    ///
    /// A cell observed in the Invalid state is written back as Invalid and
    /// reported; that state is unreachable through this API and is never
    /// silently repaired.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        let next = match self.player.get(x, y) {
            Cell::Empty => Cell::Filled,
            Cell::Filled => Cell::Crossed,
            Cell::Crossed => Cell::Empty,
            Cell::Invalid => {
                warn!("player cell ({x}, {y}) holds a corrupt value, leaving it untouched");
                Cell::Invalid
            }
        };
        self.player.set(x, y, next);
        self.check_solved();
    }

    /// Overwrite the player grid with the solution: Filled where the
    /// solution is filled, Crossed everywhere else.
    ///
    /// Side effect only; callers follow up with [`check_solved`] before
    /// redrawing.
    ///
    /// [`check_solved`]: PuzzleSession::check_solved
    pub fn reveal_solution(&mut self) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let cell = if self.solution.is_filled(x, y) {
                    Cell::Filled
                } else {
                    Cell::Crossed
                };
                self.player.set(x, y, cell);
            }
        }
    }

    /// Whether the player grid's derived clues match the solution's,
    /// element for element, per line. A clue list matching a different
    /// line's clues counts for nothing.
    pub fn is_solved(&self) -> bool {
        self.player.row_clues() == self.row_clues && self.player.column_clues() == self.column_clues
    }

    /// Re-evaluate the win condition, latching the state on a match.
    /// Returns whether the session is solved.
    pub fn check_solved(&mut self) -> bool {
        if self.state == SessionState::InProgress && self.is_solved() {
            self.state = SessionState::Solved;
        }
        self.state == SessionState::Solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 solution with the main diagonal filled.
    fn diagonal_session() -> PuzzleSession {
        let mut solution = Grid::empty(2, 2);
        solution.set(0, 0, Cell::Filled);
        solution.set(1, 1, Cell::Filled);
        PuzzleSession::with_solution(solution)
    }

    #[test]
    fn toggle_cycles_empty_filled_crossed_empty() {
        let mut session = diagonal_session();
        session.toggle_cell(0, 1);
        assert_eq!(session.player().get(0, 1), Cell::Filled);
        session.toggle_cell(0, 1);
        assert_eq!(session.player().get(0, 1), Cell::Crossed);
        session.toggle_cell(0, 1);
        assert_eq!(session.player().get(0, 1), Cell::Empty);
    }

    #[test]
    fn diagonal_scenario_solves_after_two_toggles() {
        let mut session = diagonal_session();
        assert_eq!(session.row_clues(), [vec![1], vec![1]]);
        assert_eq!(session.column_clues(), [vec![1], vec![1]]);
        assert_eq!(session.state(), SessionState::InProgress);

        session.toggle_cell(0, 0);
        assert!(!session.is_solved());
        session.toggle_cell(1, 1);
        assert!(session.is_solved());
        assert_eq!(session.state(), SessionState::Solved);
    }

    #[test]
    fn empty_solution_starts_solved() {
        let session = PuzzleSession::with_solution(Grid::empty(2, 2));
        assert_eq!(session.row_clues(), [Vec::<usize>::new(), Vec::new()]);
        assert_eq!(session.column_clues(), [Vec::<usize>::new(), Vec::new()]);
        assert_eq!(session.state(), SessionState::Solved);
    }

    #[test]
    fn matching_clues_at_wrong_position_do_not_win() {
        let mut solution = Grid::empty(2, 2);
        solution.set(0, 0, Cell::Filled);
        let mut session = PuzzleSession::with_solution(solution);

        // Same multiset of clues, wrong line.
        session.toggle_cell(1, 1);
        assert!(!session.is_solved());
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn reveal_always_solves() {
        let mut session = PuzzleSession::new(10, 10);
        session.reveal_solution();
        assert!(session.check_solved());
        assert!(session.is_solved());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut session = PuzzleSession::new(6, 4);
        session.reveal_solution();
        let first = session.player().clone();
        session.reveal_solution();
        assert_eq!(*session.player(), first);
    }

    #[test]
    fn reveal_leaves_no_empty_cells() {
        let mut session = PuzzleSession::new(5, 5);
        session.reveal_solution();
        for y in 0..5 {
            for x in 0..5 {
                assert!(matches!(
                    session.player().get(x, y),
                    Cell::Filled | Cell::Crossed
                ));
            }
        }
    }

    #[test]
    fn solved_state_persists_after_further_toggles() {
        let mut session = diagonal_session();
        session.toggle_cell(0, 0);
        session.toggle_cell(1, 1);
        assert_eq!(session.state(), SessionState::Solved);

        session.toggle_cell(0, 1);
        assert!(!session.is_solved());
        assert_eq!(session.state(), SessionState::Solved);
    }

    #[test]
    fn corrupt_cell_is_left_untouched_by_toggle() {
        let mut session = diagonal_session();
        session.player.set(1, 0, Cell::Invalid);
        session.toggle_cell(1, 0);
        assert_eq!(session.player().get(1, 0), Cell::Invalid);
    }

    #[test]
    fn color_overlay_starts_uniform() {
        let session = PuzzleSession::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(session.color_overlay().get(x, y), CellColor::DEFAULT);
            }
        }
    }
}
