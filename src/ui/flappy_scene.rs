//! UI rendering for the Flappy Bird minigame.
//!
//! The 800x600 canvas is sampled at the center of every terminal cell, so the
//! picture scales to whatever area the terminal gives us.

use super::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_modal,
    render_status_bar, score_lines,
};
use crate::app::FlappySession;
use crate::games::flappy::{FlappyState, BIRD_X, CANVAS_HEIGHT, CANVAS_WIDTH, GROUND_Y};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(135, 206, 235);
const GROUND: Color = Color::Rgb(139, 69, 19);
const PIPE: Color = Color::Rgb(46, 139, 87);
const BIRD: Color = Color::Rgb(255, 215, 0);

/// What occupies a point of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Ground,
    Pipe,
}

fn cell_at(state: &FlappyState, x: f64, y: f64) -> Cell {
    if y >= GROUND_Y {
        return Cell::Ground;
    }
    let in_pipe = state
        .pipes
        .iter()
        .any(|p| x >= p.x && x < p.right() && (y < p.top_height || y >= p.bottom_top()));
    if in_pipe {
        Cell::Pipe
    } else {
        Cell::Sky
    }
}

/// Terminal cell (col, row) containing the bird's center, if on screen.
fn bird_cell(state: &FlappyState, width: u16, height: u16) -> Option<(u16, u16)> {
    let y = state.bird.y;
    if !(0.0..CANVAS_HEIGHT).contains(&y) {
        return None;
    }
    let col = (BIRD_X / CANVAS_WIDTH * width as f64) as u16;
    let row = (y / CANVAS_HEIGHT * height as f64) as u16;
    Some((col.min(width.saturating_sub(1)), row.min(height.saturating_sub(1))))
}

/// Render the Flappy Bird screen.
pub fn render_flappy_scene(frame: &mut Frame, area: Rect, session: &FlappySession) {
    let state = session.game.state();

    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 10, 20);

    render_play_area(frame, layout.content, &state);
    render_status_bar_content(frame, layout.status_bar, &state);
    render_info_panel(frame, layout.info_panel, session, &state);

    if state.is_game_over {
        render_game_over_overlay(
            frame,
            layout.content,
            state.score,
            session.high_score.as_ref(),
            "[Space] Try again  [Esc] Menu",
        );
    } else if !state.game_started {
        render_modal(
            frame,
            layout.content,
            "Flappy Bird",
            Color::Cyan,
            vec![Line::from(Span::styled(
                "Press Space to Start",
                Style::default().fg(Color::White),
            ))],
        );
    }
}

/// Render the sky, ground, pipes and bird.
fn render_play_area(frame: &mut Frame, area: Rect, state: &FlappyState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let sx = CANVAS_WIDTH / area.width as f64;
    let sy = CANVAS_HEIGHT / area.height as f64;
    let bird = bird_cell(state, area.width, area.height);

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let y = (row as f64 + 0.5) * sy;
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            if bird == Some((col, row)) {
                let glyph = if state.bird.velocity < 0.0 { "▲" } else { "►" };
                spans.push(Span::styled(
                    glyph,
                    Style::default()
                        .fg(BIRD)
                        .bg(SKY)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let x = (col as f64 + 0.5) * sx;
            let color = match cell_at(state, x, y) {
                Cell::Sky => SKY,
                Cell::Ground => GROUND,
                Cell::Pipe => PIPE,
            };
            spans.push(Span::styled(" ", Style::default().bg(color)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, state: &FlappyState) {
    if state.is_game_over {
        render_status_bar(
            frame,
            area,
            "Game Over!",
            Color::Red,
            &[("[Space]", "Try again"), ("[Esc]", "Menu")],
        );
    } else if !state.game_started {
        render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space/Up/Enter]", "Start"), ("[Esc]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", state.score),
            Color::Green,
            &[("[Space/Up/Enter]", "Flap"), ("[Esc]", "Menu")],
        );
    }
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    session: &FlappySession,
    state: &FlappyState,
) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            " Flappy Bird",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(score_lines(state.score, session.high_score.as_ref()));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Height: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.0}", (GROUND_Y - state.bird.y).max(0.0)),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Pipes:  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.pipes.len().to_string(),
            Style::default().fg(Color::Green),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
