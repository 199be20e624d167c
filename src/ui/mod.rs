//! Terminal presentation. Reads app state; never mutates it.

pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod snake_scene;

use crate::app::{App, Screen};
use crate::high_scores::Storage;
use ratatui::Frame;

/// Draw the current screen.
pub fn draw<S: Storage>(frame: &mut Frame, app: &App<S>) {
    let area = frame.size();
    match &app.screen {
        Screen::Menu { selected } => {
            menu_scene::render_menu_scene(frame, area, *selected, app.menu_scores())
        }
        Screen::Snake(session) => snake_scene::render_snake_scene(frame, area, session),
        Screen::Flappy(session) => flappy_scene::render_flappy_scene(frame, area, session),
    }
}
