//! Screen state machine tying input, engines, scheduling and high scores together.
//!
//! Nothing here touches the terminal, so the whole flow is testable by feeding
//! inputs and synthetic frame deltas.

use crate::config::ArcadeConfig;
use crate::games::{Direction, FlappyGame, GameId, SnakeGame};
use crate::high_scores::{FileStorage, HighScore, HighScores, Storage};
use crate::input::AppInput;
use crate::scheduler::FixedStep;
use log::{error, info};

/// A running snake game plus its timer and pause flag.
#[derive(Debug, Clone)]
pub struct SnakeSession {
    pub game: SnakeGame,
    pub stepper: FixedStep,
    pub paused: bool,
    pub high_score: Option<HighScore>,
    /// Set once this run's score has been offered to the high-score store.
    recorded: bool,
}

impl SnakeSession {
    fn new(config: &ArcadeConfig, high_score: Option<HighScore>) -> Self {
        Self {
            game: SnakeGame::new(config.snake),
            stepper: FixedStep::new(config.snake.initial_speed_ms),
            paused: false,
            high_score,
            recorded: false,
        }
    }

    fn reset(&mut self) {
        self.game.reset();
        self.stepper.reset();
        self.paused = false;
        self.recorded = false;
    }
}

/// A flappy game. Starts frozen until the first jump key.
#[derive(Debug, Clone)]
pub struct FlappySession {
    pub game: FlappyGame,
    pub high_score: Option<HighScore>,
    recorded: bool,
}

impl FlappySession {
    fn new(high_score: Option<HighScore>) -> Self {
        Self {
            game: FlappyGame::new(),
            high_score,
            recorded: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Screen {
    Menu { selected: usize },
    Snake(SnakeSession),
    Flappy(FlappySession),
}

pub struct App<S = FileStorage> {
    pub config: ArcadeConfig,
    pub screen: Screen,
    high_scores: HighScores<S>,
    /// Records shown on the menu, indexed like `GameId::ALL`.
    menu_scores: Vec<Option<HighScore>>,
    should_quit: bool,
}

impl<S: Storage> App<S> {
    pub fn new(config: ArcadeConfig, storage: S) -> Self {
        let mut app = Self {
            config,
            screen: Screen::Menu { selected: 0 },
            high_scores: HighScores::new(storage),
            menu_scores: Vec::new(),
            should_quit: false,
        };
        app.refresh_menu_scores();
        app
    }

    fn refresh_menu_scores(&mut self) {
        self.menu_scores = GameId::ALL
            .iter()
            .map(|&game| self.high_scores.get(game))
            .collect();
    }

    pub fn menu_scores(&self) -> &[Option<HighScore>] {
        &self.menu_scores
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn high_score(&self, game: GameId) -> Option<HighScore> {
        self.high_scores.get(game)
    }

    /// Open a game screen.
    pub fn open(&mut self, game: GameId) {
        let high_score = self.high_scores.get(game);
        self.screen = match game {
            GameId::Snake => Screen::Snake(SnakeSession::new(&self.config, high_score)),
            GameId::FlappyBird => Screen::Flappy(FlappySession::new(high_score)),
        };
        info!("opened {}", game.id());
    }

    fn back_to_menu(&mut self) {
        let selected = match self.screen {
            Screen::Snake(_) => 0,
            Screen::Flappy(_) => 1,
            Screen::Menu { selected } => selected,
        };
        self.screen = Screen::Menu { selected };
        self.refresh_menu_scores();
    }

    /// Apply one mapped key press.
    pub fn handle_input(&mut self, input: AppInput) {
        if input == AppInput::Quit {
            self.should_quit = true;
            return;
        }

        match &mut self.screen {
            Screen::Menu { selected } => match input {
                AppInput::Up => *selected = selected.saturating_sub(1),
                AppInput::Down => *selected = (*selected + 1).min(GameId::ALL.len() - 1),
                AppInput::Confirm | AppInput::Action => {
                    let game = GameId::from_index(*selected);
                    self.open(game);
                }
                AppInput::Back => self.should_quit = true,
                _ => {}
            },
            Screen::Snake(session) => match input {
                AppInput::Back => self.back_to_menu(),
                AppInput::Reset => session.reset(),
                AppInput::Confirm if session.game.is_game_over() => session.reset(),
                AppInput::Pause | AppInput::Action => {
                    if !session.game.is_game_over() {
                        session.paused = !session.paused;
                    }
                }
                AppInput::Up | AppInput::Down | AppInput::Left | AppInput::Right => {
                    if !session.paused {
                        session.game.change_direction(direction_for(input));
                    }
                }
                _ => {}
            },
            Screen::Flappy(session) => match input {
                AppInput::Back => self.back_to_menu(),
                AppInput::Action | AppInput::Up | AppInput::Confirm => {
                    if !session.game.is_started() || session.game.is_game_over() {
                        session.game.start_game();
                        session.recorded = false;
                    } else {
                        session.game.jump();
                    }
                }
                _ => {}
            },
        }
    }

    /// Advance the active game by `dt_ms` of host time.
    pub fn tick(&mut self, dt_ms: u64) {
        match &mut self.screen {
            Screen::Menu { .. } => {}
            Screen::Snake(session) => {
                if !session.paused && !session.game.is_game_over() {
                    for _ in 0..session.stepper.advance(dt_ms) {
                        session.game.move_snake();
                        if session.game.is_game_over() {
                            break;
                        }
                    }
                }
                if session.game.is_game_over() && !session.recorded {
                    session.recorded = true;
                    let score = session.game.score();
                    if let Some(record) =
                        record_score(&mut self.high_scores, GameId::Snake, score)
                    {
                        session.high_score = Some(record);
                    }
                }
            }
            Screen::Flappy(session) => {
                session.game.update(dt_ms as f64);
                if session.game.is_game_over() && !session.recorded {
                    session.recorded = true;
                    let score = session.game.score();
                    if let Some(record) =
                        record_score(&mut self.high_scores, GameId::FlappyBird, score)
                    {
                        session.high_score = Some(record);
                    }
                }
            }
        }
    }
}

fn direction_for(input: AppInput) -> Direction {
    match input {
        AppInput::Up => Direction::Up,
        AppInput::Down => Direction::Down,
        AppInput::Left => Direction::Left,
        _ => Direction::Right,
    }
}

/// Offer a finished run's score. Storage failures are logged, not raised.
fn record_score<S: Storage>(
    high_scores: &mut HighScores<S>,
    game: GameId,
    score: u32,
) -> Option<HighScore> {
    match high_scores.update(game, score) {
        Ok(record) => Some(record),
        Err(e) => {
            error!("could not save {} high score: {}", game.id(), e);
            None
        }
    }
}
