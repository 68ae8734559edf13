mod best_score;

pub use best_score::{BEST_SCORE_FILE, BestScoreRecord, BestScoreStore};
