//! Flappy Bird data structures and tuning constants.
//!
//! Coordinates are canvas pixels: x grows to the right, y grows downward, and
//! the ground occupies the bottom `GROUND_HEIGHT` pixels.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const BIRD_SIZE: f64 = 30.0;
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_GAP: f64 = 150.0;
/// Pixels a pipe moves left per update.
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_SPAWN_INTERVAL_MS: f64 = 1500.0;
/// Velocity added per update.
pub const GRAVITY: f64 = 0.5;
/// Velocity set by a jump (negative = upward).
pub const JUMP_FORCE: f64 = -10.0;
pub const GROUND_HEIGHT: f64 = 100.0;
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Smallest height of a top pipe; also the margin kept above the ground.
pub const MIN_PIPE_HEIGHT: f64 = 50.0;
/// Fixed horizontal position of the bird's center.
pub const BIRD_X: f64 = CANVAS_WIDTH / 2.0;
/// Y coordinate of the ground line.
pub const GROUND_Y: f64 = CANVAS_HEIGHT - GROUND_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Vertical position of the bird's center.
    pub y: f64,
    pub velocity: f64,
    pub gravity: f64,
    pub jump_force: f64,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: CANVAS_HEIGHT / 2.0,
            velocity: 0.0,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
        }
    }
}

/// A top/bottom obstacle pair with a vertical gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Height of the top rectangle, measured from the ceiling.
    pub top_height: f64,
    /// Height of the bottom rectangle, measured up from the ground line.
    pub bottom_height: f64,
    pub gap: f64,
    pub width: f64,
    /// Whether the bird has passed this pipe (for scoring).
    pub scored: bool,
}

impl Pipe {
    /// A pipe at the right edge whose top rectangle is `top_height` tall.
    pub fn new(x: f64, top_height: f64) -> Self {
        Self {
            x,
            top_height,
            bottom_height: GROUND_Y - top_height - PIPE_GAP,
            gap: PIPE_GAP,
            width: PIPE_WIDTH,
            scored: false,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate where the bottom rectangle starts.
    pub fn bottom_top(&self) -> f64 {
        GROUND_Y - self.bottom_height
    }
}

/// Snapshot of a flappy game. Handed out by value; never aliases engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlappyState {
    pub bird: Bird,
    /// Oldest (leftmost) pipe first.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub is_game_over: bool,
    /// Physics is frozen until the first start.
    pub game_started: bool,
}

impl Default for FlappyState {
    fn default() -> Self {
        Self {
            bird: Bird::default(),
            pipes: Vec::new(),
            score: 0,
            is_game_over: false,
            game_started: false,
        }
    }
}

/// Flappy engine. Owns its state, its random source and its spawn clock.
#[derive(Debug, Clone)]
pub struct FlappyGame<R = StdRng> {
    pub(super) state: FlappyState,
    /// Sum of all update deltas since the last start, in milliseconds.
    pub(super) clock_ms: f64,
    /// Clock reading at the last pipe spawn; `None` spawns on the next update.
    pub(super) last_spawn_ms: Option<f64>,
    pub(super) rng: R,
}

impl FlappyGame<StdRng> {
    /// Create a game seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for FlappyGame<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FlappyGame<R> {
    /// Create a game with an explicit random source. The game is not started.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: FlappyState::default(),
            clock_ms: 0.0,
            last_spawn_ms: None,
            rng,
        }
    }

    /// Append a pipe at the right edge with a random gap position.
    pub(super) fn spawn_pipe(&mut self) {
        // Top height in [MIN, GROUND_Y - GAP - MIN) keeps both rectangles at least MIN tall
        let max_height = GROUND_Y - PIPE_GAP - MIN_PIPE_HEIGHT;
        let top_height = self.rng.gen_range(MIN_PIPE_HEIGHT..max_height);
        self.state.pipes.push(Pipe::new(CANVAS_WIDTH, top_height));
    }
}
