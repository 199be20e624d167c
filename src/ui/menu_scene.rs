//! Game selection screen.

use super::game_common::{format_record_date, render_status_bar};
use crate::games::GameId;
use crate::high_scores::HighScore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the menu with one card per game. `scores` is indexed like `GameId::ALL`.
pub fn render_menu_scene(
    frame: &mut Frame,
    area: Rect,
    selected: usize,
    scores: &[Option<HighScore>],
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Game Selection ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(GameId::ALL.iter().map(|_| Constraint::Length(5)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(2));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Pick a game",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    for (i, game) in GameId::ALL.iter().enumerate() {
        let score = scores.get(i).and_then(|s| s.as_ref());
        render_game_card(frame, chunks[i + 1], *game, i == selected, score);
    }

    render_status_bar(
        frame,
        chunks[chunks.len() - 1],
        "Arcade",
        Color::White,
        &[("[Up/Down]", "Select"), ("[Enter]", "Play"), ("[Q]", "Quit")],
    );
}

fn render_game_card(
    frame: &mut Frame,
    area: Rect,
    game: GameId,
    selected: bool,
    high_score: Option<&HighScore>,
) {
    let width = area.width.min(48);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let border = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let best = match high_score {
        Some(record) => format!(
            "High score: {} ({})",
            record.score,
            format_record_date(&record.date)
        ),
        None => "High score: -".to_string(),
    };
    let lines = vec![
        Line::from(Span::styled(
            game.name(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            game.description(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(best, Style::default().fg(Color::Yellow))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
