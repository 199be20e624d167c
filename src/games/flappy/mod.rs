//! Flappy Bird minigame.
//!
//! A side-scroller where the bird falls under gravity and jumps on input.
//! Pipes scroll in from the right edge; passing one scores a point and
//! touching one, the ceiling, or the ground ends the game.

pub mod logic;
pub mod types;

pub use types::*;
