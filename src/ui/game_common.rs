//! Shared UI pieces for the game screens.

use crate::high_scores::HighScore;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field, top left inside the outer border.
    pub content: Rect,
    /// Two-line status bar under the play field.
    pub status_bar: Rect,
    /// Score panel on the right, with its own border.
    pub info_panel: Rect,
}

/// Create the standard game layout with an outer border.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a 2-line status bar: a message, then `[key] action` hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height < 2 || controls.is_empty() {
        return;
    }

    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Render the info panel frame and return its inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Score and high-score lines for an info panel.
pub fn score_lines(score: u32, high_score: Option<&HighScore>) -> Vec<Line<'static>> {
    let best = high_score.map(|r| r.score).unwrap_or(0);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(best.to_string(), Style::default().fg(Color::Yellow)),
        ]),
    ];
    if let Some(record) = high_score {
        lines.push(Line::from(Span::styled(
            format!(" {}", format_record_date(&record.date)),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

/// Short calendar date for a stored timestamp; falls back to the raw text.
pub fn format_record_date(date: &str) -> String {
    match date.parse::<DateTime<Utc>>() {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Render a centered modal box with a bold title and body lines.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    body: Vec<Line<'static>>,
) {
    let modal_width = 36u16.min(area.width);
    let modal_height = (body.len() as u16 + 4).min(area.height);
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(body);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// "Game Over!" modal with the final and best score.
pub fn render_game_over_overlay(
    frame: &mut Frame,
    area: Rect,
    score: u32,
    high_score: Option<&HighScore>,
    retry_hint: &str,
) {
    let best = high_score.map(|r| r.score).unwrap_or(0);
    let new_best = high_score.is_some_and(|r| r.score == score && score > 0);
    let mut body = vec![Line::from(Span::styled(
        format!("Score: {}   Best: {}", score, best),
        Style::default().fg(Color::White),
    ))];
    if new_best {
        body.push(Line::from(Span::styled(
            "New high score!",
            Style::default().fg(Color::Yellow),
        )));
    }
    body.push(Line::from(Span::styled(
        retry_hint.to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    render_modal(frame, area, "Game Over!", Color::Red, body);
}
