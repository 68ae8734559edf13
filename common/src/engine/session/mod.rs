mod snake_session;

use std::future::Future;

use crate::games::snake::SnakeSnapshot;

pub use snake_session::{GameOverNotification, SessionCommand, SnakeSession};

/// Receives everything a running session publishes. Implemented by the host
/// application, which decides how frames reach the screen.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
