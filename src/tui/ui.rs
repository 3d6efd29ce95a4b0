//! Stateless UI rendering for 2048.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::animation::{Animation, CellEffect};
use super::app::App;
use super::palette::Theme;
use crate::high_score::HighScoreStore;
use rand::Rng;
use strictly_2048::Board;

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;

/// Renders the whole screen.
pub fn draw<S: HighScoreStore, R: Rng>(frame: &mut Frame, app: &App<S, R>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Scores
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly 2048")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app.session().score(), app.session().high_score());

    let board = app.session().board();
    let board_area = center_rect(chunks[2], board_width(board), board_height(board));
    draw_board(frame, board_area, board, app.animation(), app.theme());

    if app.is_game_over() {
        draw_game_over(frame, board_area);
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("←↑→↓ / wasd / hjkl: slide   r: restart   t: theme   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, score: u64, high_score: u64) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let score = Paragraph::new(score.to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(score, halves[0]);

    let best = Paragraph::new(high_score.to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Best"));
    frame.render_widget(best, halves[1]);
}

// Boards are capped at MAX_SIZE, so these stay well inside u16.
fn board_width(board: &Board) -> u16 {
    let n = u16::try_from(board.size()).unwrap_or(u16::MAX);
    n.saturating_mul(CELL_WIDTH)
        .saturating_add(n.saturating_add(1).saturating_mul(GAP))
}

fn board_height(board: &Board) -> u16 {
    let n = u16::try_from(board.size()).unwrap_or(u16::MAX);
    n.saturating_mul(CELL_HEIGHT)
        .saturating_add(n.saturating_add(1).saturating_mul(GAP))
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, animation: &Animation, theme: Theme) {
    let background = Style::default().bg(theme.board_background());
    frame.render_widget(Block::default().style(background), area);

    for (row, values) in board.rows().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            let cell = Rect {
                x: area.x + GAP + col as u16 * (CELL_WIDTH + GAP),
                y: area.y + GAP + row as u16 * (CELL_HEIGHT + GAP),
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            };
            // Terminal too small for the whole grid.
            if cell.right() > area.right() || cell.bottom() > area.bottom() {
                continue;
            }
            draw_cell(frame, cell, value, animation.effect(row, col), theme);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, value: u32, effect: CellEffect, theme: Theme) {
    let mut style = Style::default()
        .bg(theme.tile_background(value))
        .fg(theme.tile_foreground(value))
        .add_modifier(Modifier::BOLD);

    match effect {
        CellEffect::None => {}
        CellEffect::Changed => style = style.add_modifier(Modifier::UNDERLINED),
        CellEffect::Spawned => style = style.add_modifier(Modifier::REVERSED),
    }

    let label = if value == 0 {
        String::new()
    } else {
        value.to_string()
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(label, style)),
        Line::from(""),
    ])
    .style(style)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_game_over(frame: &mut Frame, board_area: Rect) {
    let banner_area = center_rect(board_area, board_area.width.min(20), 3);
    frame.render_widget(Clear, banner_area);

    let banner = Paragraph::new("Game Over!")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, banner_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
