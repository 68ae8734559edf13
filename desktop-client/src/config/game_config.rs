use common::config::Validate;
use common::games::snake::{SnakeSessionSettings, WallCollisionMode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub field_size: u32,
    pub tick_interval_ms: u32,
    pub apple_count: u32,
    pub warp_walls: bool,
}

impl GameConfig {
    pub fn to_session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            field_width: self.field_size as usize,
            field_height: self.field_size as usize,
            wall_collision_mode: WallCollisionMode::from_warp(self.warp_walls),
            apple_count: self.apple_count as usize,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_session_settings().validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: 20,
            tick_interval_ms: 150,
            apple_count: 3,
            warp_walls: false,
        }
    }
}
