mod board;
mod game_over;

pub use board::render_board;
pub use game_over::render_game_over;
