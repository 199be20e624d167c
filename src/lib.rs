//! Arcade - Terminal Snake and Flappy Bird
//!
//! This module exposes the engines, high-score store and app state machine
//! for testing and embedding.

pub mod app;
pub mod config;
pub mod constants;
pub mod games;
pub mod high_scores;
pub mod input;
pub mod paths;
pub mod scheduler;
pub mod ui;

pub use app::{App, Screen};
pub use config::ArcadeConfig;
pub use constants::*;
pub use games::{FlappyGame, GameId, SnakeConfig, SnakeGame};
pub use high_scores::{FileStorage, HighScore, HighScores, MemoryStorage, Storage};
