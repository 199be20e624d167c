//! Snake game UI rendering.
//!
//! Uses half-block pixel rendering. Each grid cell maps to a colored pixel;
//! pairs of vertical pixels are packed into one terminal row using the `▀`
//! (upper half block) character with fg=top, bg=bottom colors.

use super::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_modal,
    render_status_bar, score_lines,
};
use crate::app::SnakeSession;
use crate::games::{Position, SnakeConfig, SnakeState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀

const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Render the Snake screen.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, session: &SnakeSession) {
    let state = session.game.state();
    let grid_size = session.game.config().grid_size;

    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, 12, 20);

    render_play_field(frame, layout.content, &state, grid_size);
    render_status_bar_content(frame, layout.status_bar, session, &state);
    render_info_panel(frame, layout.info_panel, session, &state);

    if state.is_game_over {
        render_game_over_overlay(
            frame,
            layout.content,
            state.score,
            session.high_score.as_ref(),
            "[R/Enter] Play again  [Esc] Menu",
        );
    } else if session.paused {
        render_modal(
            frame,
            layout.content,
            "Paused",
            Color::Yellow,
            vec![Line::from(Span::styled(
                "[P/Space] Resume",
                Style::default().fg(Color::DarkGray),
            ))],
        );
    }
}

/// Interpolated color for a body segment; fades toward the tail.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

/// Color grid in game coordinates, `pixels[y][x]`.
fn build_pixels(state: &SnakeState, grid_size: usize) -> Vec<Vec<Option<Color>>> {
    let mut pixels = vec![vec![None; grid_size]; grid_size];
    let in_grid = |p: &Position| {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < grid_size && (p.y as usize) < grid_size
    };

    if in_grid(&state.food) {
        // Pulses with the step counter
        let pulse = ((state.tick_count % 20) as f64 / 20.0 * std::f64::consts::TAU).sin();
        let g = (80.0 + pulse * 30.0) as u8;
        let b = (40.0 + pulse * 20.0) as u8;
        pixels[state.food.y as usize][state.food.x as usize] = Some(Color::Rgb(255, g, b));
    }

    let snake_len = state.snake.len();
    for (i, seg) in state.snake.iter().enumerate() {
        if !in_grid(seg) {
            continue;
        }
        pixels[seg.y as usize][seg.x as usize] = Some(if i == 0 {
            HEAD_COLOR
        } else {
            body_color(i, snake_len)
        });
    }

    pixels
}

fn border_span(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(BORDER_COLOR))
}

/// Whether the whole board plus its border fits in `area`.
fn board_fits(area: Rect, grid: usize) -> bool {
    area.width as usize >= grid + 2 && area.height as usize >= grid.div_ceil(2) + 2
}

/// Render the board: one character per cell, two cell rows per terminal row.
fn render_play_field(frame: &mut Frame, area: Rect, state: &SnakeState, grid_size: i16) {
    let grid = grid_size.max(0) as usize;
    if !board_fits(area, grid) {
        let msg = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Board needs {}x{}", grid + 2, grid.div_ceil(2) + 2),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(msg).alignment(Alignment::Center), area);
        return;
    }

    let pixels = build_pixels(state, grid);

    let content_rows = grid.div_ceil(2);
    let render_w = (grid + 2) as u16;
    let inner_w = grid;
    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;
    let bottom = area.y + area.height;

    let top: String = std::iter::once(BORDER_TL)
        .chain(std::iter::repeat(BORDER_H).take(inner_w))
        .chain(std::iter::once(BORDER_TR))
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(border_span(top))),
        Rect::new(x_off, y_off, render_w, 1),
    );

    let empty_row: Vec<Option<Color>> = vec![None; grid];
    for term_row in 0..content_rows {
        let row_y = y_off + 1 + term_row as u16;
        if row_y >= bottom {
            break;
        }
        let top_row = pixels.get(term_row * 2).unwrap_or(&empty_row);
        let bot_row = pixels.get(term_row * 2 + 1).unwrap_or(&empty_row);

        let mut spans = vec![border_span(BORDER_V.to_string())];

        // Batch consecutive cells with the same colors into one span
        let mut cur: Option<(Color, Color)> = None;
        let mut cur_text = String::new();
        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()).take(inner_w) {
            let colors = (top_c.unwrap_or(EMPTY_BG), bot_c.unwrap_or(EMPTY_BG));
            if cur != Some(colors) {
                if let Some((fg, bg)) = cur {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(fg).bg(bg),
                    ));
                }
                cur = Some(colors);
            }
            cur_text.push(HALF_TOP);
        }
        if let Some((fg, bg)) = cur {
            spans.push(Span::styled(cur_text, Style::default().fg(fg).bg(bg)));
        }

        spans.push(border_span(BORDER_V.to_string()));
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, row_y, render_w, 1),
        );
    }

    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < bottom {
        let line: String = std::iter::once(BORDER_BL)
            .chain(std::iter::repeat(BORDER_H).take(inner_w))
            .chain(std::iter::once(BORDER_BR))
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(border_span(line))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    session: &SnakeSession,
    state: &SnakeState,
) {
    if state.is_game_over {
        render_status_bar(
            frame,
            area,
            "Game Over!",
            Color::Red,
            &[("[R/Enter]", "Reset"), ("[Esc]", "Menu")],
        );
    } else if session.paused {
        render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[P]", "Resume"), ("[R]", "Reset"), ("[Esc]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[("[Arrows]", "Move"), ("[P]", "Pause"), ("[Esc]", "Menu")],
        );
    }
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    session: &SnakeSession,
    state: &SnakeState,
) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            " Snake",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(score_lines(state.score, session.high_score.as_ref()));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Length: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.snake.len().to_string(),
            Style::default().fg(Color::Green),
        ),
    ]));
    lines.extend(settings_lines(session.game.config()));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Board size, step speed and cell size as info panel rows.
fn settings_lines(config: &SnakeConfig) -> Vec<Line<'static>> {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };
    vec![
        row(" Grid:   ", format!("{0}x{0}", config.grid_size)),
        row(" Speed:  ", format!("{}ms", config.initial_speed_ms)),
        row(" Cell:   ", format!("{}px", config.cell_size)),
    ]
}
