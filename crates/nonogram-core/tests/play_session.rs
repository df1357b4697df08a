use nonogram_core::{Cell, Grid, PuzzleSession, SessionState};

/// 3x3 plus-sign pattern:
/// ```text
/// .#.
/// ###
/// .#.
/// ```
fn cross_pattern() -> Grid {
    let mut grid = Grid::empty(3, 3);
    grid.set(1, 0, Cell::Filled);
    grid.set(0, 1, Cell::Filled);
    grid.set(1, 1, Cell::Filled);
    grid.set(2, 1, Cell::Filled);
    grid.set(1, 2, Cell::Filled);
    grid
}

#[test]
fn play_a_fixed_puzzle_to_the_win() {
    let solution = cross_pattern();
    let mut session = PuzzleSession::with_solution(solution.clone());

    assert_eq!(session.row_clues(), [vec![1], vec![3], vec![1]]);
    assert_eq!(session.column_clues(), [vec![1], vec![3], vec![1]]);
    assert_eq!(session.state(), SessionState::InProgress);

    // Cross out the corners first, as a player would; crossed cells never
    // affect the win condition.
    for (x, y) in [(0, 0), (2, 0), (0, 2), (2, 2)] {
        session.toggle_cell(x, y); // Empty -> Filled
        session.toggle_cell(x, y); // Filled -> Crossed
        assert_eq!(session.state(), SessionState::InProgress);
    }

    // Fill in the cross; only the final cell completes the signature.
    let filled: Vec<(usize, usize)> = (0..3)
        .flat_map(|y| (0..3).map(move |x| (x, y)))
        .filter(|&(x, y)| solution.is_filled(x, y))
        .collect();
    for (i, &(x, y)) in filled.iter().enumerate() {
        session.toggle_cell(x, y);
        assert_eq!(session.is_solved(), i + 1 == filled.len());
    }
    assert_eq!(session.state(), SessionState::Solved);
}

#[test]
fn reveal_then_check_is_the_give_up_path() {
    let mut session = PuzzleSession::new(12, 8);
    assert_eq!(session.width(), 12);
    assert_eq!(session.height(), 8);

    session.reveal_solution();
    assert!(session.check_solved());
    assert_eq!(session.state(), SessionState::Solved);

    // The revealed board carries the solution's exact clue signature.
    let rows = session.player().row_clues();
    let cols = session.player().column_clues();
    assert_eq!(rows.as_slice(), session.row_clues());
    assert_eq!(cols.as_slice(), session.column_clues());
}
