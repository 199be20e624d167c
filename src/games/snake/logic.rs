//! Snake game logic: movement, direction changes, collision detection.

use super::types::*;
use crate::constants::SNAKE_FOOD_REWARD;
use log::{debug, info};
use rand::Rng;

impl<R: Rng> SnakeGame<R> {
    /// Start over: centered single segment heading right, fresh food, score 0.
    pub fn reset(&mut self) {
        self.state = initial_state(&self.config, &mut self.rng);
    }

    /// Queue a heading for the next step.
    ///
    /// Ignored when `direction` is the reverse of the direction travelled on the
    /// last step, so two quick presses between ticks cannot fold the snake onto
    /// its own neck. Ignored once the game is over.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.state.is_game_over {
            return;
        }
        if direction != self.state.direction.opposite() {
            self.state.next_direction = direction;
        }
    }

    /// Advance one grid step. No-op once the game is over.
    pub fn move_snake(&mut self) {
        let state = &mut self.state;
        if state.is_game_over {
            return;
        }
        let Some(head) = state.snake.front().copied() else {
            return;
        };

        state.tick_count += 1;
        state.direction = state.next_direction;

        let (dx, dy) = state.direction.delta();
        let new_head = Position {
            x: head.x + dx,
            y: head.y + dy,
        };

        let size = self.config.grid_size;
        let hit_wall =
            new_head.x < 0 || new_head.x >= size || new_head.y < 0 || new_head.y >= size;
        // Whole body including the tail that has not moved yet
        if hit_wall || state.snake.contains(&new_head) {
            state.is_game_over = true;
            debug!(
                "snake crashed at ({}, {}) after {} steps, score {}",
                new_head.x, new_head.y, state.tick_count, state.score
            );
            return;
        }

        state.snake.push_front(new_head);

        if new_head == state.food {
            // Grow (keep the tail) and score
            state.score += SNAKE_FOOD_REWARD;
            match spawn_food(&state.snake, size, &mut self.rng) {
                Some(food) => state.food = food,
                None => {
                    state.is_game_over = true;
                    info!("snake filled the board with score {}", state.score);
                }
            }
        } else {
            state.snake.pop_back();
        }
    }

    /// Copy of the current state.
    pub fn state(&self) -> SnakeState {
        self.state.clone()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    fn test_game() -> SnakeGame<ChaCha8Rng> {
        SnakeGame::with_rng(SnakeConfig::default(), ChaCha8Rng::seed_from_u64(7))
    }

    fn place_snake(game: &mut SnakeGame<ChaCha8Rng>, segments: &[(i16, i16)]) {
        game.state.snake = segments
            .iter()
            .map(|&(x, y)| Position { x, y })
            .collect::<VecDeque<_>>();
    }

    #[test]
    fn test_direction_change() {
        let mut game = test_game();
        game.change_direction(Direction::Up);
        assert_eq!(game.state.next_direction, Direction::Up);
        // Applied on the next step
        assert_eq!(game.state.direction, Direction::Right);
        game.state.food = Position { x: 0, y: 0 };
        game.move_snake();
        assert_eq!(game.state.direction, Direction::Up);
        assert_eq!(game.state.head(), Some(Position { x: 10, y: 9 }));
    }

    #[test]
    fn test_direction_prevents_180_reversal_all_directions() {
        let mut game = test_game();
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            game.state.direction = dir;
            game.state.next_direction = dir;
            game.change_direction(dir.opposite());
            assert_eq!(game.state.direction, dir);
            assert_eq!(game.state.next_direction, dir);
        }
    }

    #[test]
    fn test_quick_turn_cannot_reverse_before_step() {
        let mut game = test_game();
        place_snake(&mut game, &[(10, 10), (9, 10), (8, 10)]);
        game.state.food = Position { x: 0, y: 0 };

        // Up then Left between two steps: Left is still the reverse of Right
        game.change_direction(Direction::Up);
        game.change_direction(Direction::Left);
        assert_eq!(game.state.next_direction, Direction::Up);

        game.move_snake();
        assert!(!game.state.is_game_over);
    }

    #[test]
    fn test_change_direction_ignored_after_game_over() {
        let mut game = test_game();
        place_snake(&mut game, &[(19, 5)]);
        game.state.food = Position { x: 0, y: 0 };
        game.move_snake();
        assert!(game.state.is_game_over);

        let finished = game.state();
        game.change_direction(Direction::Up);
        assert_eq!(game.state(), finished);
        assert_eq!(game.state.next_direction, Direction::Right);
    }

    #[test]
    fn test_change_direction_idempotent() {
        let mut game = test_game();
        game.change_direction(Direction::Down);
        let once = game.state();
        game.change_direction(Direction::Down);
        assert_eq!(game.state(), once);
    }

    #[test]
    fn test_wall_collision() {
        let mut game = test_game();
        place_snake(&mut game, &[(19, 5)]);
        game.state.food = Position { x: 0, y: 0 };
        game.move_snake();
        assert!(game.state.is_game_over);
        // Body untouched on the crashing step
        assert_eq!(game.state.head(), Some(Position { x: 19, y: 5 }));
    }

    #[test]
    fn test_top_wall_collision() {
        let mut game = test_game();
        place_snake(&mut game, &[(4, 0)]);
        game.state.food = Position { x: 10, y: 10 };
        game.change_direction(Direction::Up);
        game.move_snake();
        assert!(game.state.is_game_over);
    }

    #[test]
    fn test_self_collision() {
        let mut game = test_game();
        // Head at (5,5) moving Down into its own body at (5,6)
        place_snake(&mut game, &[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]);
        game.state.direction = Direction::Left;
        game.state.next_direction = Direction::Left;
        game.state.food = Position { x: 0, y: 0 };
        game.change_direction(Direction::Down);
        game.move_snake();
        assert!(game.state.is_game_over);
    }

    #[test]
    fn test_moving_into_vacating_tail_is_a_collision() {
        let mut game = test_game();
        // 2x2 loop: the head's next cell is the current tail
        place_snake(&mut game, &[(5, 5), (6, 5), (6, 6), (5, 6)]);
        game.state.direction = Direction::Left;
        game.state.next_direction = Direction::Left;
        game.state.food = Position { x: 0, y: 0 };
        game.change_direction(Direction::Down);
        game.move_snake();
        assert!(game.state.is_game_over);
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut game = test_game();
        game.state.food = Position { x: 11, y: 10 };
        game.move_snake();
        assert_eq!(game.state.score, 10);
        assert_eq!(game.state.snake.len(), 2);
        assert_eq!(game.state.head(), Some(Position { x: 11, y: 10 }));
        assert!(!game.state.snake.contains(&game.state.food));
    }

    #[test]
    fn test_normal_move_keeps_length() {
        let mut game = test_game();
        place_snake(&mut game, &[(10, 10), (9, 10), (8, 10)]);
        game.state.food = Position { x: 0, y: 0 };
        game.move_snake();
        assert_eq!(game.state.snake.len(), 3);
        assert_eq!(game.state.score, 0);
        assert_eq!(
            game.state.snake.back().copied(),
            Some(Position { x: 9, y: 10 })
        );
    }

    #[test]
    fn test_no_movement_after_game_over() {
        let mut game = test_game();
        game.state.is_game_over = true;
        let before = game.state();
        game.move_snake();
        assert_eq!(game.state(), before);
    }

    #[test]
    fn test_full_board_ends_game() {
        let config = SnakeConfig {
            grid_size: 2,
            ..Default::default()
        };
        let mut game = SnakeGame::with_rng(config, ChaCha8Rng::seed_from_u64(1));
        place_snake(&mut game, &[(0, 0), (0, 1), (1, 1)]);
        game.state.direction = Direction::Up;
        game.state.next_direction = Direction::Right;
        game.state.food = Position { x: 1, y: 0 };
        game.move_snake();
        assert_eq!(game.state.snake.len(), 4);
        assert_eq!(game.state.score, 10);
        assert!(game.state.is_game_over);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = test_game();
        game.state.food = Position { x: 11, y: 10 };
        game.move_snake();
        game.state.is_game_over = true;

        game.reset();

        let state = game.state();
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.head(), Some(Position { x: 10, y: 10 }));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over);
        assert!(!state.snake.contains(&state.food));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut game = test_game();
        let mut snapshot = game.state();
        snapshot.score = 999;
        snapshot.snake.clear();
        assert_eq!(game.score(), 0);
        game.state.food = Position { x: 0, y: 0 };
        game.move_snake();
        assert_eq!(game.state.snake.len(), 1);
    }
}
