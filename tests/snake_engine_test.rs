//! Integration test: Snake engine
//!
//! Drives the public engine API with seeded random sources and checks the
//! board invariants after every step: the head stays on the board, segments
//! never overlap, food never sits under the snake, and score tracks length.

use arcade::games::{Direction, Position, SnakeState};
use arcade::{SnakeConfig, SnakeGame, SNAKE_FOOD_REWARD};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn seeded_game(grid_size: i16, seed: u64) -> SnakeGame<ChaCha8Rng> {
    let config = SnakeConfig {
        grid_size,
        ..SnakeConfig::default()
    };
    SnakeGame::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
}

fn assert_invariants(state: &SnakeState, grid_size: i16) {
    let mut seen = HashSet::new();
    for seg in &state.snake {
        assert!(
            (0..grid_size).contains(&seg.x) && (0..grid_size).contains(&seg.y),
            "segment {:?} off a {}x{} board",
            seg,
            grid_size,
            grid_size
        );
        assert!(seen.insert(*seg), "segment {:?} appears twice", seg);
    }
    if !state.is_game_over {
        assert!(!state.snake.contains(&state.food), "food under the snake");
    }
    let eaten = state.snake.len() as u32 - 1;
    assert_eq!(state.score, eaten * SNAKE_FOOD_REWARD);
}

/// Head toward the food, sidestepping when the food is straight behind.
fn steer(state: &SnakeState, grid_size: i16) -> Direction {
    let head = state.snake[0];
    let food = state.food;
    let wanted = if food.x > head.x {
        Direction::Right
    } else if food.x < head.x {
        Direction::Left
    } else if food.y > head.y {
        Direction::Down
    } else {
        Direction::Up
    };
    if wanted != state.direction.opposite() {
        return wanted;
    }
    match state.direction {
        Direction::Left | Direction::Right if head.y > 0 => Direction::Up,
        Direction::Left | Direction::Right => Direction::Down,
        Direction::Up | Direction::Down if head.x < grid_size - 1 => Direction::Right,
        Direction::Up | Direction::Down => Direction::Left,
    }
}

#[test]
fn test_new_game_is_centered_heading_right() {
    let game = seeded_game(20, 1);
    let state = game.state();
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake[0], Position { x: 10, y: 10 });
    assert_eq!(state.direction, Direction::Right);
    assert_eq!(state.score, 0);
    assert!(!state.is_game_over);
    assert_invariants(&state, 20);
}

#[test]
fn test_first_move_goes_right() {
    let mut game = seeded_game(20, 2);
    game.move_snake();
    let state = game.state();
    assert_eq!(state.snake[0], Position { x: 11, y: 10 });
    assert!(!state.is_game_over);
    assert_invariants(&state, 20);
}

#[test]
fn test_running_into_right_wall_ends_game() {
    let mut game = seeded_game(20, 3);
    for _ in 0..9 {
        game.move_snake();
    }
    assert!(!game.is_game_over());
    assert_eq!(game.state().snake[0].x, 19);

    game.move_snake();
    assert!(game.is_game_over());

    // Frozen once over
    let frozen = game.state();
    game.change_direction(Direction::Up);
    game.move_snake();
    assert_eq!(game.state(), frozen);
}

#[test]
fn test_reverse_is_ignored() {
    let mut game = seeded_game(20, 4);
    game.change_direction(Direction::Left);
    game.move_snake();
    assert_eq!(game.state().snake[0], Position { x: 11, y: 10 });
    assert_eq!(game.state().direction, Direction::Right);
}

#[test]
fn test_turn_applies_on_next_step() {
    let mut game = seeded_game(20, 5);
    game.change_direction(Direction::Down);
    assert_eq!(game.state().snake[0], Position { x: 10, y: 10 });
    game.move_snake();
    assert_eq!(game.state().snake[0], Position { x: 10, y: 11 });
    assert_eq!(game.state().direction, Direction::Down);
}

#[test]
fn test_eating_grows_and_scores() {
    let mut game = seeded_game(20, 6);
    let mut ate = false;
    for _ in 0..200 {
        let before = game.state();
        game.change_direction(steer(&before, 20));
        game.move_snake();
        let after = game.state();
        assert_invariants(&after, 20);

        if after.score > before.score {
            assert_eq!(after.score, before.score + SNAKE_FOOD_REWARD);
            assert_eq!(after.snake.len(), before.snake.len() + 1);
            assert_eq!(after.snake[0], before.food);
            assert_ne!(after.food, before.food);
            ate = true;
            break;
        }
        assert!(!after.is_game_over, "greedy steering crashed before eating");
    }
    assert!(ate, "snake never reached the food");
}

#[test]
fn test_invariants_hold_over_long_random_runs() {
    for seed in 0..8 {
        let mut game = seeded_game(12, seed);
        for _ in 0..500 {
            let state = game.state();
            if state.is_game_over {
                break;
            }
            game.change_direction(steer(&state, 12));
            game.move_snake();
            assert_invariants(&game.state(), 12);
        }
    }
}

#[test]
fn test_reset_restores_initial_layout() {
    let mut game = seeded_game(20, 7);
    for _ in 0..15 {
        game.move_snake();
    }
    assert!(game.is_game_over());

    game.reset();
    let state = game.state();
    assert!(!state.is_game_over);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake[0], Position { x: 10, y: 10 });
    assert_eq!(state.direction, Direction::Right);
    assert_eq!(state.tick_count, 0);
}

#[test]
fn test_smallest_board_fills_or_crashes() {
    let mut game = seeded_game(2, 8);
    assert_eq!(game.state().snake[0], Position { x: 1, y: 1 });
    for _ in 0..20 {
        if game.is_game_over() {
            break;
        }
        let state = game.state();
        game.change_direction(steer(&state, 2));
        game.move_snake();
        assert_invariants(&game.state(), 2);
    }
    assert!(game.is_game_over());
}
