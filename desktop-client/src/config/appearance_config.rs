use common::config::Validate;
use serde::{Deserialize, Serialize};

use crate::colors::parse_hex_color;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub gradient: bool,
    pub accent_color: String,
}

impl Validate for AppearanceConfig {
    fn validate(&self) -> Result<(), String> {
        if parse_hex_color(&self.accent_color).is_none() {
            return Err(format!(
                "accent_color must be #RRGGBB or #RRGGBBAA, got {:?}",
                self.accent_color
            ));
        }
        Ok(())
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            gradient: true,
            accent_color: "#00ff00".to_string(),
        }
    }
}
