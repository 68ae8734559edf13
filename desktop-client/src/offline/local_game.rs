use common::engine::session::{SessionCommand, SnakeSession};
use common::games::SessionRng;
use common::games::snake::SnakeSessionSettings;
use common::log;
use common::score::BestScoreStore;
use tokio::sync::mpsc;

use crate::state::SharedState;
use super::LocalBroadcaster;

pub async fn local_game_task(
    settings: SnakeSessionSettings,
    rng: SessionRng,
    best_scores: BestScoreStore,
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) {
    let broadcaster = LocalBroadcaster::new(shared_state);
    let session = SnakeSession::new(settings, rng, best_scores);

    let handle = tokio::spawn(session.run(command_rx, broadcaster));
    if let Err(e) = handle.await {
        log!("Game session task failed: {}", e);
    }
}
