mod game_state;
mod settings;
mod snake;
mod types;

pub use game_state::{SnakeGameState, SnakeSnapshot, TickOutcome};
pub use settings::{
    MAX_APPLE_COUNT, MAX_FIELD_SIZE, MAX_TICK_INTERVAL_MS, MIN_APPLE_COUNT, MIN_FIELD_SIZE,
    MIN_TICK_INTERVAL_MS, STARTING_SNAKE_LENGTH, SnakeSessionSettings,
};
pub use snake::Snake;
pub use types::{DeathReason, Direction, FieldSize, Point, WallCollisionMode};
