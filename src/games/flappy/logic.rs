//! Game logic for the Flappy Bird minigame.

use super::types::*;
use log::debug;
use rand::Rng;

/// Axis-aligned overlap between the bird's square and either rectangle of `pipe`.
pub fn collides_with_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let half = BIRD_SIZE / 2.0;
    let bird_left = BIRD_X - half;
    let bird_right = BIRD_X + half;
    let bird_top = bird.y - half;
    let bird_bottom = bird.y + half;

    bird_right > pipe.x
        && bird_left < pipe.right()
        && (bird_top < pipe.top_height || bird_bottom > pipe.bottom_top())
}

/// True when the bird's center is above the ceiling or below the ground line.
pub fn out_of_bounds(bird: &Bird) -> bool {
    bird.y < 0.0 || bird.y > GROUND_Y
}

impl<R: Rng> FlappyGame<R> {
    /// Reset everything and begin a run.
    pub fn start_game(&mut self) {
        self.state = FlappyState {
            game_started: true,
            ..FlappyState::default()
        };
        self.clock_ms = 0.0;
        self.last_spawn_ms = None;
    }

    /// Set the bird's velocity to the jump impulse. Not additive.
    pub fn jump(&mut self) {
        if !self.state.is_game_over {
            self.state.bird.velocity = self.state.bird.jump_force;
        }
    }

    /// Advance one frame.
    ///
    /// Physics moves a fixed amount per call no matter how large `delta_ms`
    /// is, so game speed follows the host frame rate. `delta_ms` only drives
    /// the pipe spawn timer.
    pub fn update(&mut self, delta_ms: f64) {
        if !self.state.game_started || self.state.is_game_over {
            return;
        }

        // Semi-implicit Euler
        let bird = &mut self.state.bird;
        bird.velocity += bird.gravity;
        bird.y += bird.velocity;

        self.clock_ms += delta_ms.max(0.0);
        let spawn_due = match self.last_spawn_ms {
            None => true,
            Some(last) => self.clock_ms - last > PIPE_SPAWN_INTERVAL_MS,
        };
        if spawn_due {
            self.spawn_pipe();
            self.last_spawn_ms = Some(self.clock_ms);
        }

        let mut passed = 0;
        for pipe in &mut self.state.pipes {
            pipe.x -= PIPE_SPEED;
            if !pipe.scored && pipe.right() < BIRD_X {
                pipe.scored = true;
                passed += 1;
            }
        }
        self.state.score += passed;
        self.state.pipes.retain(|pipe| pipe.right() > 0.0);

        let bird = &self.state.bird;
        let hit_pipe = self
            .state
            .pipes
            .iter()
            .any(|pipe| collides_with_pipe(bird, pipe));
        if out_of_bounds(bird) || hit_pipe {
            self.state.is_game_over = true;
            debug!(
                "bird crashed at y={:.1} with {} pipes passed",
                bird.y, self.state.score
            );
        }
    }

    /// Copy of the current state.
    pub fn state(&self) -> FlappyState {
        self.state.clone()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    pub fn is_started(&self) -> bool {
        self.state.game_started
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }
}
