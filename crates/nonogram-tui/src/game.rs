use nonogram_core::{PuzzleSession, SessionState};

/// Board sizes offered by the menu selector, as (width, height).
pub const BOARD_SIZES: &[(usize, usize)] = &[(5, 5), (10, 10), (15, 10), (15, 15), (20, 15)];

/// Index of the 10x10 default in `BOARD_SIZES`.
const DEFAULT_SIZE_INDEX: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Solved,
}

/// Front-end state: the owned puzzle session plus everything that only
/// exists for presentation (cursor, screen, overlay flags).
pub struct Game {
    pub session: PuzzleSession,
    pub screen: Screen,
    pub cursor_x: usize,
    pub cursor_y: usize,
    pub size_index: usize,
    pub revealed: bool,
    pub show_help: bool,
    pub show_quit_confirm: bool,
}

impl Game {
    pub fn new() -> Self {
        let (width, height) = BOARD_SIZES[DEFAULT_SIZE_INDEX];
        Self {
            session: PuzzleSession::new(width, height),
            screen: Screen::Menu,
            cursor_x: 0,
            cursor_y: 0,
            size_index: DEFAULT_SIZE_INDEX,
            revealed: false,
            show_help: false,
            show_quit_confirm: false,
        }
    }

    pub fn board_size(&self) -> (usize, usize) {
        BOARD_SIZES[self.size_index]
    }

    pub fn next_size(&mut self) {
        self.size_index = (self.size_index + 1) % BOARD_SIZES.len();
    }

    pub fn prev_size(&mut self) {
        self.size_index = (self.size_index + BOARD_SIZES.len() - 1) % BOARD_SIZES.len();
    }

    pub fn start_new_game(&mut self) {
        let (width, height) = self.board_size();
        self.session = PuzzleSession::new(width, height);
        self.cursor_x = width / 2;
        self.cursor_y = height / 2;
        self.revealed = false;
        self.show_help = false;
        self.show_quit_confirm = false;
        // A randomized solution that came out entirely empty already matches
        // the untouched player grid.
        self.screen = match self.session.state() {
            SessionState::Solved => Screen::Solved,
            SessionState::InProgress => Screen::Playing,
        };
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let width = self.session.width() as i32;
        let height = self.session.height() as i32;
        self.cursor_x = (self.cursor_x as i32 + dx).rem_euclid(width) as usize;
        self.cursor_y = (self.cursor_y as i32 + dy).rem_euclid(height) as usize;
    }

    /// Toggle the cell under the cursor and pick up the win if it happened.
    pub fn toggle_cell(&mut self) {
        self.session.toggle_cell(self.cursor_x, self.cursor_y);
        if self.session.state() == SessionState::Solved {
            self.screen = Screen::Solved;
        }
    }

    /// Fill in the whole solution, then re-check the (now certain) win.
    pub fn reveal(&mut self) {
        self.session.reveal_solution();
        self.revealed = true;
        if self.session.check_solved() {
            self.screen = Screen::Solved;
        }
    }

    /// Count of cells the player has filled in, for the info panel.
    pub fn filled_count(&self) -> usize {
        let player = self.session.player();
        (0..player.height())
            .flat_map(|y| (0..player.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| player.is_filled(x, y))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonogram_core::{Cell, Grid};

    fn game_with_diagonal() -> Game {
        let mut solution = Grid::empty(2, 2);
        solution.set(0, 0, Cell::Filled);
        solution.set(1, 1, Cell::Filled);
        let mut game = Game::new();
        game.session = PuzzleSession::with_solution(solution);
        game.screen = Screen::Playing;
        game.cursor_x = 0;
        game.cursor_y = 0;
        game
    }

    #[test]
    fn cursor_wraps_around_edges() {
        let mut game = game_with_diagonal();
        game.move_cursor(-1, 0);
        assert_eq!((game.cursor_x, game.cursor_y), (1, 0));
        game.move_cursor(0, -1);
        assert_eq!((game.cursor_x, game.cursor_y), (1, 1));
        game.move_cursor(1, 0);
        assert_eq!((game.cursor_x, game.cursor_y), (0, 1));
    }

    #[test]
    fn winning_toggle_switches_to_solved_screen() {
        let mut game = game_with_diagonal();
        game.toggle_cell();
        assert_eq!(game.screen, Screen::Playing);
        game.move_cursor(1, 1);
        game.toggle_cell();
        assert_eq!(game.screen, Screen::Solved);
    }

    #[test]
    fn reveal_switches_to_solved_screen() {
        let mut game = game_with_diagonal();
        game.reveal();
        assert!(game.revealed);
        assert_eq!(game.screen, Screen::Solved);
        assert_eq!(game.filled_count(), 2);
    }
}
