use std::collections::HashSet;

use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, FieldSize, Point, WallCollisionMode};

const MAX_RANDOM_SPAWN_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    AteApple { at: Point, score: u32 },
    Died { reason: DeathReason, score: u32 },
    GameOver,
}

/// Owned copy of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub tick: u64,
    /// Tail first, head last.
    pub segments: Vec<Point>,
    pub apples: Vec<Point>,
    pub field_size: FieldSize,
    pub score: u32,
    pub wall_collision_mode: WallCollisionMode,
    pub death_reason: Option<DeathReason>,
}

impl SnakeSnapshot {
    pub fn is_over(&self) -> bool {
        self.death_reason.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    apples: HashSet<Point>,
    field_size: FieldSize,
    wall_collision_mode: WallCollisionMode,
    apple_count: usize,
    death_reason: Option<DeathReason>,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(
            [Point::new(1, 1), Point::new(2, 1), Point::new(3, 1)],
            Direction::Right,
        );
        let mut state = Self::from_parts(
            settings.field_size(),
            settings.wall_collision_mode,
            snake,
            [],
            settings.apple_count,
        );
        for _ in 0..settings.apple_count {
            state.spawn_apple(rng);
        }
        state
    }

    /// Builds a board from an explicit layout. Apples are taken as given, the
    /// target count only drives respawns.
    pub fn from_parts(
        field_size: FieldSize,
        wall_collision_mode: WallCollisionMode,
        snake: Snake,
        apples: impl IntoIterator<Item = Point>,
        apple_count: usize,
    ) -> Self {
        Self {
            snake,
            apples: apples.into_iter().collect(),
            field_size,
            wall_collision_mode,
            apple_count,
            death_reason: None,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apples(&self) -> &HashSet<Point> {
        &self.apples
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn score(&self) -> u32 {
        self.snake.score
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn wall_collision_mode(&self) -> WallCollisionMode {
        self.wall_collision_mode
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn is_over(&self) -> bool {
        self.death_reason.is_some()
    }

    /// Queues a turn for the next tick. Reversing the last applied direction is refused.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_over() || direction.is_opposite(&self.snake.direction) {
            return false;
        }
        self.snake.pending_direction = Some(direction);
        true
    }

    pub fn set_wall_collision_mode(&mut self, mode: WallCollisionMode) {
        self.wall_collision_mode = mode;
    }

    pub fn advance(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::GameOver;
        }

        let direction = self.snake.latch_direction();
        let mut next_head = self.snake.head().step(direction);

        match self.wall_collision_mode {
            WallCollisionMode::WrapAround => next_head = self.field_size.wrap(next_head),
            WallCollisionMode::Death => {
                if !self.field_size.contains(next_head) {
                    return self.die(DeathReason::WallCollision);
                }
            }
        }

        // The tail hasn't moved out yet, so its cell still counts.
        if self.snake.occupies(&next_head) {
            return self.die(DeathReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if self.apples.remove(&next_head) {
            self.snake.score += 1;
            log!(
                "Ate apple at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.snake.score
            );
            self.spawn_apple(rng);
            return TickOutcome::AteApple {
                at: next_head,
                score: self.snake.score,
            };
        }

        self.snake.pop_tail();
        TickOutcome::Moved
    }

    pub fn snapshot(&self, tick: u64) -> SnakeSnapshot {
        let mut apples: Vec<Point> = self.apples.iter().copied().collect();
        apples.sort_by_key(|p| (p.y, p.x));

        SnakeSnapshot {
            tick,
            segments: self.snake.body.iter().copied().collect(),
            apples,
            field_size: self.field_size,
            score: self.snake.score,
            wall_collision_mode: self.wall_collision_mode,
            death_reason: self.death_reason,
        }
    }

    fn die(&mut self, reason: DeathReason) -> TickOutcome {
        self.death_reason = Some(reason);
        log!("Snake died ({:?}). Final score: {}", reason, self.snake.score);
        TickOutcome::Died {
            reason,
            score: self.snake.score,
        }
    }

    fn is_occupied(&self, point: &Point) -> bool {
        self.snake.occupies(point) || self.apples.contains(point)
    }

    fn spawn_apple(&mut self, rng: &mut SessionRng) -> Option<Point> {
        let width = self.field_size.width as i32;
        let height = self.field_size.height as i32;

        for _ in 0..MAX_RANDOM_SPAWN_ATTEMPTS {
            let pos = Point::new(rng.random_range(0..width), rng.random_range(0..height));
            if !self.is_occupied(&pos) {
                self.apples.insert(pos);
                return Some(pos);
            }
        }

        let free: Vec<Point> = (0..height)
            .flat_map(|y| (0..width).map(move |x| Point::new(x, y)))
            .filter(|p| !self.is_occupied(p))
            .collect();

        if free.is_empty() {
            log!("No free cell left for an apple");
            return None;
        }

        let pos = free[rng.random_range(0..free.len())];
        self.apples.insert(pos);
        Some(pos)
    }
}
