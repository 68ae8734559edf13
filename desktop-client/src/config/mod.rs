mod appearance_config;
mod game_config;
mod main_config;

pub use appearance_config::AppearanceConfig;
pub use game_config::GameConfig;
pub use main_config::{CONFIG_FILE, ClientConfigManager, Config, get_config_manager};
