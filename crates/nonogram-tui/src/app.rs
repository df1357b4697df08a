use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::game::{Game, Screen};
use crate::ui;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();
    let result = run_loop(&mut terminal, &mut game);

    // Clean up terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, game))?;

        // Every mutation is a direct response to one input event and nothing
        // ticks in the background, so a blocking read suffices.
        if let Event::Key(key) = event::read()? {
            // Only handle Press events (crossterm sends Press+Release on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_key(game, key) {
                return Ok(());
            }
        }
    }
}

/// Handle a key event. Returns true if the app should quit.
fn handle_key(game: &mut Game, key: KeyEvent) -> bool {
    match game.screen {
        Screen::Menu => handle_menu_key(game, key),
        Screen::Playing => handle_playing_key(game, key),
        Screen::Solved => handle_solved_key(game, key),
    }
}

fn handle_menu_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Left => {
            game.prev_size();
        }
        KeyCode::Down | KeyCode::Right => {
            game.next_size();
        }
        KeyCode::Enter => {
            game.start_new_game();
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            return true;
        }
        _ => {}
    }
    false
}

fn handle_playing_key(game: &mut Game, key: KeyEvent) -> bool {
    // Handle quit confirmation first
    if game.show_quit_confirm {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            _ => {
                game.show_quit_confirm = false;
            }
        }
        return false;
    }

    // While the help overlay is open, only allow closing it
    if game.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => {
                game.show_help = false;
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        // Movement: arrow keys
        KeyCode::Up => game.move_cursor(0, -1),
        KeyCode::Down => game.move_cursor(0, 1),
        KeyCode::Left => game.move_cursor(-1, 0),
        KeyCode::Right => game.move_cursor(1, 0),

        // Toggle the cell under the cursor
        KeyCode::Char(' ') | KeyCode::Enter => game.toggle_cell(),

        // Give up and show the solution
        KeyCode::Char('r') | KeyCode::Char('R') => game.reveal(),

        // Abandon to the menu
        KeyCode::Char('n') | KeyCode::Char('N') => {
            game.screen = Screen::Menu;
        }

        // Explanation overlay
        KeyCode::Char('?') => {
            game.show_help = true;
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            game.show_quit_confirm = true;
        }

        _ => {}
    }
    false
}

fn handle_solved_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('n') => {
            game.screen = Screen::Menu;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            return true;
        }
        _ => {}
    }
    false
}
