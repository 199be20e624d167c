//! The arcade games and the identifiers their high scores are stored under.

pub mod flappy;
pub mod snake;

pub use flappy::{FlappyGame, FlappyState};
pub use snake::{Direction, Position, SnakeConfig, SnakeGame, SnakeState};

/// Which game a screen or high score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameId {
    Snake,
    FlappyBird,
}

impl GameId {
    pub const ALL: [GameId; 2] = [GameId::Snake, GameId::FlappyBird];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameId::Snake)
    }

    /// Stable identifier used in storage keys.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::FlappyBird => "flappy-bird",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Snake => "Snake Game",
            Self::FlappyBird => "Flappy Bird",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Snake => "Classic snake on a grid",
            Self::FlappyBird => "Navigate through pipes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_ids() {
        assert_eq!(GameId::Snake.id(), "snake");
        assert_eq!(GameId::FlappyBird.id(), "flappy-bird");
    }

    #[test]
    fn test_from_index() {
        assert_eq!(GameId::from_index(0), GameId::Snake);
        assert_eq!(GameId::from_index(1), GameId::FlappyBird);
        assert_eq!(GameId::from_index(99), GameId::Snake);
    }

    #[test]
    fn test_names_not_empty() {
        for game in GameId::ALL {
            assert!(!game.name().is_empty());
            assert!(!game.description().is_empty());
        }
    }
}
