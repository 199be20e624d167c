//! Snake minigame.
//!
//! The snake moves one cell per timer tick in its current direction. Eating
//! food scores points and grows the body; running into a wall or into itself
//! ends the game.

pub mod logic;
pub mod types;

pub use types::*;
