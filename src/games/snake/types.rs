//! Snake game data structures.
//!
//! A grid simulation advanced one cell per timer tick. The snake grows by one
//! segment for every food it eats.

use crate::constants::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, DEFAULT_SNAKE_SPEED_MS, FOOD_SPAWN_ATTEMPTS,
    MAX_GRID_SIZE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

/// Board and timing settings for a snake game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Cells per side of the square board.
    pub grid_size: i16,
    /// Pixel size of one cell. Only meaningful to pixel renderers.
    pub cell_size: u16,
    /// Milliseconds between movement steps.
    pub initial_speed_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            initial_speed_ms: DEFAULT_SNAKE_SPEED_MS,
        }
    }
}

impl SnakeConfig {
    /// A board needs at least one free cell next to the starting segment
    /// and must stay small enough to render.
    pub fn is_valid(&self) -> bool {
        (2..=MAX_GRID_SIZE).contains(&self.grid_size) && self.initial_speed_ms > 0
    }
}

/// Snapshot of a snake game. Handed out by value; never aliases engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeState {
    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Position>,
    pub food: Position,
    /// Direction travelled on the last step.
    pub direction: Direction,
    /// Buffered heading applied on the next step.
    pub next_direction: Direction,
    pub score: u32,
    pub is_game_over: bool,
    /// Movement steps taken since the last reset.
    pub tick_count: u64,
}

impl SnakeState {
    pub fn head(&self) -> Option<Position> {
        self.snake.front().copied()
    }
}

/// Snake engine. Owns its state and its random source exclusively.
#[derive(Debug, Clone)]
pub struct SnakeGame<R = StdRng> {
    pub(super) config: SnakeConfig,
    pub(super) state: SnakeState,
    pub(super) rng: R,
}

impl SnakeGame<StdRng> {
    /// Create a game seeded from system entropy.
    pub fn new(config: SnakeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> SnakeGame<R> {
    /// Create a game with an explicit random source.
    ///
    /// Panics if `config.grid_size < 2`.
    pub fn with_rng(config: SnakeConfig, mut rng: R) -> Self {
        assert!(
            config.grid_size >= 2,
            "snake grid must be at least 2x2, got {}",
            config.grid_size
        );
        let state = initial_state(&config, &mut rng);
        Self { config, state, rng }
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }
}

/// Centered single segment heading right, with food somewhere else.
pub(super) fn initial_state<R: Rng>(config: &SnakeConfig, rng: &mut R) -> SnakeState {
    let center = config.grid_size / 2;
    let mut snake = VecDeque::new();
    snake.push_back(Position {
        x: center,
        y: center,
    });

    // A 2x2 or larger board always leaves (0, 0) or another cell free
    let food = spawn_food(&snake, config.grid_size, rng).unwrap_or(Position { x: 0, y: 0 });

    SnakeState {
        snake,
        food,
        direction: Direction::Right,
        next_direction: Direction::Right,
        score: 0,
        is_game_over: false,
        tick_count: 0,
    }
}

/// Find a random empty cell for food (not occupied by the snake).
///
/// Draws uniformly for a bounded number of attempts, then scans for the first
/// free cell. Returns `None` only when the snake covers the whole board.
pub fn spawn_food<R: Rng>(
    snake: &VecDeque<Position>,
    grid_size: i16,
    rng: &mut R,
) -> Option<Position> {
    for _ in 0..FOOD_SPAWN_ATTEMPTS {
        let pos = Position {
            x: rng.gen_range(0..grid_size),
            y: rng.gen_range(0..grid_size),
        };
        if !snake.contains(&pos) {
            return Some(pos);
        }
    }

    (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Position { x, y }))
        .find(|pos| !snake.contains(pos))
}
