use std::time::Duration;

use super::types::{FieldSize, WallCollisionMode};
use crate::config::Validate;

pub const MIN_FIELD_SIZE: usize = 5;
pub const MAX_FIELD_SIZE: usize = 50;
pub const MIN_TICK_INTERVAL_MS: u64 = 25;
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;
pub const MIN_APPLE_COUNT: usize = 1;
pub const MAX_APPLE_COUNT: usize = 50;

/// Cells covered by the snake a new game starts with.
pub const STARTING_SNAKE_LENGTH: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub wall_collision_mode: WallCollisionMode,
    pub apple_count: usize,
    pub tick_interval: Duration,
}

impl SnakeSessionSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            wall_collision_mode: WallCollisionMode::Death,
            apple_count: 3,
            tick_interval: Duration::from_millis(150),
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&self.field_width)
            || !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&self.field_height)
        {
            return Err(format!(
                "Field dimensions must be between {} and {}",
                MIN_FIELD_SIZE, MAX_FIELD_SIZE
            ));
        }
        let tick_ms = self.tick_interval.as_millis() as u64;
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick_ms) {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            ));
        }
        if !(MIN_APPLE_COUNT..=MAX_APPLE_COUNT).contains(&self.apple_count) {
            return Err(format!(
                "Apple count must be between {} and {}",
                MIN_APPLE_COUNT, MAX_APPLE_COUNT
            ));
        }
        let free_cells = self.field_size().cell_count() - STARTING_SNAKE_LENGTH;
        if self.apple_count >= free_cells {
            return Err("Apple count must leave room on the field".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let settings = SnakeSessionSettings {
            tick_interval: Duration::ZERO,
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_field_bounds() {
        let too_small = SnakeSessionSettings {
            field_width: 4,
            ..SnakeSessionSettings::default()
        };
        assert!(too_small.validate().is_err());

        let too_big = SnakeSessionSettings {
            field_height: 51,
            ..SnakeSessionSettings::default()
        };
        assert!(too_big.validate().is_err());
    }

    #[test]
    fn test_apple_count_bounds() {
        let none = SnakeSessionSettings {
            apple_count: 0,
            ..SnakeSessionSettings::default()
        };
        assert!(none.validate().is_err());

        let crowded = SnakeSessionSettings {
            field_width: 5,
            field_height: 5,
            apple_count: 22,
            ..SnakeSessionSettings::default()
        };
        assert!(crowded.validate().is_err());
    }
}
