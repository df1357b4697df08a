use nonogram_core::{Cell, PuzzleSession, SessionState};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

use crate::game::{Game, Screen, BOARD_SIZES};

// ── Constants ────────────────────────────────────────────────────────────────

/// Each cell occupies 2 characters of width.
const CELL_W: usize = 2;

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, game: &Game) {
    match game.screen {
        Screen::Menu => draw_menu(f, game),
        Screen::Playing => draw_playing(f, game),
        Screen::Solved => {
            // Keep the finished board visible under the popup.
            draw_playing(f, game);
            draw_solved_popup(f, game);
        }
    }

    if game.show_help {
        draw_help(f);
    }
    if game.show_quit_confirm {
        draw_quit_confirm(f);
    }
}

// ── Menu screen ──────────────────────────────────────────────────────────────

fn draw_menu(f: &mut Frame, game: &Game) {
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Min(0),
    ])
    .split(center_rect(84, 30, area));

    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let title_lines = vec![
        Line::from(Span::styled(
            r"███╗   ██╗ ██████╗ ███╗   ██╗ ██████╗  ██████╗ ██████╗  █████╗ ███╗   ███╗",
            title_style,
        )),
        Line::from(Span::styled(
            r"████╗  ██║██╔═══██╗████╗  ██║██╔═══██╗██╔════╝ ██╔══██╗██╔══██╗████╗ ████║",
            title_style,
        )),
        Line::from(Span::styled(
            r"██╔██╗ ██║██║   ██║██╔██╗ ██║██║   ██║██║  ███╗██████╔╝███████║██╔████╔██║",
            title_style,
        )),
        Line::from(Span::styled(
            r"██║╚██╗██║██║   ██║██║╚██╗██║██║   ██║██║   ██║██╔══██╗██╔══██║██║╚██╔╝██║",
            title_style,
        )),
        Line::from(Span::styled(
            r"██║ ╚████║╚██████╔╝██║ ╚████║╚██████╔╝╚██████╔╝██║  ██║██║  ██║██║ ╚═╝ ██║",
            title_style,
        )),
        Line::from(Span::styled(
            r"╚═╝  ╚═══╝ ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝  ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝     ╚═╝",
            title_style,
        )),
    ];

    let title = Paragraph::new(title_lines).alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let (width, height) = BOARD_SIZES[game.size_index];
    let selector_line = Line::from(vec![
        Span::styled("◄  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  {} × {}  ", width, height),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ►", Style::default().fg(Color::DarkGray)),
    ]);
    let selector = Paragraph::new(vec![
        Line::from(Span::styled("Select Board Size", Style::default().fg(Color::White))),
        Line::from(""),
        selector_line,
    ])
    .alignment(Alignment::Center);
    f.render_widget(selector, chunks[3]);

    let controls = Paragraph::new(vec![
        Line::from(Span::styled(
            "Controls",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::styled("  Change board size", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled("  Start puzzle", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled("  Quit", Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Every puzzle is a fresh random pattern.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(controls, chunks[5]);
}

// ── Playing screen ───────────────────────────────────────────────────────────

fn draw_playing(f: &mut Frame, game: &Game) {
    let area = f.area();

    let outer = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
    let main_area = outer[0];
    let bottom_area = outer[1];

    let (board_w, board_h) = board_extent(&game.session);

    let h_chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(board_w + 2),
        Constraint::Length(2),
        Constraint::Length(24),
        Constraint::Min(0),
    ])
    .split(main_area);

    let board_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(board_h + 2),
        Constraint::Min(0),
    ])
    .split(h_chunks[1]);

    draw_board(f, game, board_v[1]);

    let panel_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(12),
        Constraint::Min(0),
    ])
    .split(h_chunks[3]);

    draw_info_panel(f, game, panel_v[1]);

    draw_key_hints(f, bottom_area);
}

// ── Board rendering ──────────────────────────────────────────────────────────

/// Inner extent of the rendered board: clue gutters plus cells plus the
/// group separator every five rows/columns.
fn board_extent(session: &PuzzleSession) -> (u16, u16) {
    let width = session.width();
    let height = session.height();
    let w = row_gutter_width(session) + 1 + width * CELL_W + (width - 1) / 5;
    let h = column_header_height(session) + height + (height - 1) / 5;
    (w as u16, h as u16)
}

fn clue_text(clues: &[usize]) -> String {
    clues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn row_gutter_width(session: &PuzzleSession) -> usize {
    session
        .row_clues()
        .iter()
        .map(|clues| clue_text(clues).len())
        .max()
        .unwrap_or(0)
}

fn column_header_height(session: &PuzzleSession) -> usize {
    session
        .column_clues()
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
}

fn clue_style(satisfied: bool) -> Style {
    if satisfied {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

fn draw_board(f: &mut Frame, game: &Game, area: Rect) {
    let session = &game.session;
    let width = session.width();
    let height = session.height();
    let gutter = row_gutter_width(session);
    let header = column_header_height(session);
    let use_colors = game.revealed || session.state() == SessionState::Solved;
    let show_cursor = game.screen == Screen::Playing;

    // Lines whose derived clues already match the solution get dim clues.
    let player_rows = session.player().row_clues();
    let player_cols = session.player().column_clues();

    let mut lines: Vec<Line> = Vec::with_capacity(header + height + (height - 1) / 5);

    // Column clues, bottom-aligned above the board.
    for header_row in 0..header {
        let mut spans: Vec<Span> = vec![Span::raw(" ".repeat(gutter + 1))];
        for x in 0..width {
            if x > 0 && x % 5 == 0 {
                spans.push(Span::raw(" "));
            }
            let clues = &session.column_clues()[x];
            let slot = header_row + clues.len();
            if slot >= header {
                let satisfied = player_cols[x] == *clues;
                spans.push(Span::styled(
                    format!("{:>2}", clues[slot - header]),
                    clue_style(satisfied),
                ));
            } else {
                spans.push(Span::raw("  "));
            }
        }
        lines.push(Line::from(spans));
    }

    for y in 0..height {
        if y > 0 && y % 5 == 0 {
            lines.push(separator_line(width, gutter));
        }

        let clues = &session.row_clues()[y];
        let satisfied = player_rows[y] == *clues;
        let mut spans: Vec<Span> = vec![Span::styled(
            format!("{:>gutter$} ", clue_text(clues)),
            clue_style(satisfied),
        )];
        for x in 0..width {
            if x > 0 && x % 5 == 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let is_cursor = show_cursor && x == game.cursor_x && y == game.cursor_y;
            spans.push(cell_span(game, x, y, is_cursor, use_colors));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::bordered()
        .title(" Nonogram ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Horizontal group separator between every fifth row.
fn separator_line(width: usize, gutter: usize) -> Line<'static> {
    let mut s = String::with_capacity(gutter + 1 + width * CELL_W + (width - 1) / 5);
    s.push_str(&" ".repeat(gutter + 1));
    for x in 0..width {
        if x > 0 && x % 5 == 0 {
            s.push('┼');
        }
        s.push_str("──");
    }
    Line::from(Span::styled(s, Style::default().fg(Color::DarkGray)))
}

/// Render one player cell, 2 characters wide.
fn cell_span(game: &Game, x: usize, y: usize, is_cursor: bool, use_colors: bool) -> Span<'static> {
    let cell = game.session.player().get(x, y);

    if cell == Cell::Filled {
        // Full-block glyphs cover the background, so the cursor recolors
        // the block instead of highlighting behind it.
        let fg = if is_cursor {
            Color::Yellow
        } else if use_colors {
            let color = game.session.color_overlay().get(x, y);
            Color::Rgb(color.r, color.g, color.b)
        } else {
            Color::White
        };
        return Span::styled("██", Style::default().fg(fg));
    }

    let style = if is_cursor {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    match cell {
        Cell::Crossed => Span::styled("╳ ", style),
        Cell::Empty => Span::styled("· ", style),
        // Unreachable through play; rendered loudly rather than hidden.
        _ => Span::styled("!!", style.fg(Color::Red)),
    }
}

// ── Info panel ───────────────────────────────────────────────────────────────

fn draw_info_panel(f: &mut Frame, game: &Game, area: Rect) {
    let block = Block::bordered()
        .title(" Info ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let (status, status_color) = if game.revealed {
        ("Revealed", Color::Magenta)
    } else if game.session.state() == SessionState::Solved {
        ("Solved", Color::Green)
    } else {
        ("In progress", Color::Yellow)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Board:  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} × {}", game.session.width(), game.session.height()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Filled: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", game.filled_count()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Status: ", Style::default().fg(Color::Gray)),
            Span::styled(status, Style::default().fg(status_color).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" ██", Style::default().fg(Color::White)),
            Span::styled(" filled", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled(" ╳ ", Style::default().fg(Color::DarkGray)),
            Span::styled(" crossed out", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled(" undecided", Style::default().fg(Color::Gray)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Key hints (bottom status bar) ────────────────────────────────────────────

fn draw_key_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ←↑↓→", Style::default().fg(Color::Yellow)),
        Span::styled(" Move  ", Style::default().fg(Color::Gray)),
        Span::styled("Spc", Style::default().fg(Color::Yellow)),
        Span::styled(" Toggle  ", Style::default().fg(Color::Gray)),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::styled(" Reveal  ", Style::default().fg(Color::Gray)),
        Span::styled("n", Style::default().fg(Color::Yellow)),
        Span::styled(" New  ", Style::default().fg(Color::Gray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" Help  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::Gray)),
    ]);

    let bar = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray));
    f.render_widget(bar, area);
}

// ── Solved popup ─────────────────────────────────────────────────────────────

fn draw_solved_popup(f: &mut Frame, game: &Game) {
    let area = f.area();
    let popup = center_rect(40, 11, area);

    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Solved ")
        .border_type(BorderType::Double)
        .style(Style::default().fg(Color::Green));

    let headline = if game.revealed {
        "SOLUTION REVEALED"
    } else {
        "SOLVED!"
    };

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Board: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} × {}", game.session.width(), game.session.height()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Filled cells: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}", game.filled_count()), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter for a new puzzle, Q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Help overlay ─────────────────────────────────────────────────────────────

fn draw_help(f: &mut Frame) {
    let area = f.area();
    let popup = center_rect(60, 15, area);

    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" How to play ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Cyan));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(" Each number is the length of a run of filled cells in"),
        Line::from(" that row or column, in order. Rows read left to right,"),
        Line::from(" columns top to bottom, and runs are separated by at"),
        Line::from(" least one gap."),
        Line::from(""),
        Line::from(" Fill cells until every row and column matches its"),
        Line::from(" clues. Crossing a cell is only a note to yourself: the"),
        Line::from(" clues treat it exactly like an empty cell."),
        Line::from(""),
        Line::from(Span::styled(
            " Press ? or Esc to close.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .wrap(Wrap { trim: false });

    f.render_widget(text, popup);
}

// ── Quit confirmation dialog ─────────────────────────────────────────────────

fn draw_quit_confirm(f: &mut Frame) {
    let area = f.area();
    let popup = center_rect(36, 7, area);

    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Quit? ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Red));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Abandon the puzzle and quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled("/", Style::default().fg(Color::Gray)),
            Span::styled("Enter", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(" Yes   ", Style::default().fg(Color::Gray)),
            Span::styled("Any key", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" No", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Layout helpers ───────────────────────────────────────────────────────────

fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    let horiz = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1]);

    horiz[1]
}
