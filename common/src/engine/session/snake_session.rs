use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::config::{ConfigContentProvider, FileContentConfigProvider};
use crate::games::SessionRng;
use crate::games::snake::{
    DeathReason, Direction, SnakeGameState, SnakeSessionSettings, SnakeSnapshot, TickOutcome,
    WallCollisionMode,
};
use crate::log;
use crate::score::BestScoreStore;
use super::GameBroadcaster;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionCommand {
    Turn(Direction),
    Restart(SnakeSessionSettings),
    SetWallCollisionMode(WallCollisionMode),
    Shutdown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverNotification {
    pub score: u32,
    pub best_score: u32,
    pub is_new_best: bool,
    pub reason: DeathReason,
    pub tick: u64,
}

/// One player's game plus the clock that drives it. Restarting swaps the
/// board and the clock together, so a stale tick never reaches a new board.
pub struct SnakeSession<P: ConfigContentProvider = FileContentConfigProvider> {
    settings: SnakeSessionSettings,
    game_state: SnakeGameState,
    rng: SessionRng,
    tick: u64,
    best_scores: Arc<BestScoreStore<P>>,
}

impl<P> SnakeSession<P>
where
    P: ConfigContentProvider + Send + Sync + 'static,
{
    pub fn new(
        settings: SnakeSessionSettings,
        mut rng: SessionRng,
        best_scores: BestScoreStore<P>,
    ) -> Self {
        let game_state = SnakeGameState::new(&settings, &mut rng);
        log!(
            "New game: {}x{}, {} apples, {}ms, {:?}, seed {}",
            settings.field_width,
            settings.field_height,
            settings.apple_count,
            settings.tick_interval.as_millis(),
            settings.wall_collision_mode,
            rng.seed()
        );

        Self {
            settings,
            game_state,
            rng,
            tick: 0,
            best_scores: Arc::new(best_scores),
        }
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        self.game_state.snapshot(self.tick)
    }

    pub fn turn(&mut self, direction: Direction) -> bool {
        self.game_state.set_direction(direction)
    }

    pub fn set_wall_collision_mode(&mut self, mode: WallCollisionMode) {
        self.settings.wall_collision_mode = mode;
        self.game_state.set_wall_collision_mode(mode);
    }

    /// Advances the board by one tick and records the best score in place.
    /// Returns the notification when this tick ended the game.
    pub fn step(&mut self) -> Option<GameOverNotification> {
        let (reason, score) = self.advance()?;
        let (is_new_best, best_score) = record_best_score(&self.best_scores, score);
        Some(self.game_over(reason, score, is_new_best, best_score))
    }

    pub fn restart(&mut self, settings: SnakeSessionSettings) {
        self.game_state = SnakeGameState::new(&settings, &mut self.rng);
        self.settings = settings;
        self.tick = 0;
        log!(
            "Game restarted: {} apples, {}ms, {:?}",
            self.settings.apple_count,
            self.settings.tick_interval.as_millis(),
            self.settings.wall_collision_mode
        );
    }

    pub async fn run<B: GameBroadcaster>(
        mut self,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: B,
    ) {
        broadcaster.broadcast_state(self.snapshot()).await;
        let mut ticker = new_ticker(self.settings.tick_interval);

        loop {
            tokio::select! {
                _ = ticker.tick(), if !self.game_state.is_over() => {
                    let died = self.advance();
                    broadcaster.broadcast_state(self.snapshot()).await;
                    if let Some((reason, score)) = died {
                        let notification = self.finish(reason, score).await;
                        broadcaster.broadcast_game_over(notification).await;
                    }
                }
                command = commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    match command {
                        SessionCommand::Shutdown => break,
                        SessionCommand::Restart(settings) => {
                            self.restart(settings);
                            ticker = new_ticker(self.settings.tick_interval);
                            broadcaster.broadcast_state(self.snapshot()).await;
                        }
                        SessionCommand::SetWallCollisionMode(mode) => {
                            self.set_wall_collision_mode(mode);
                            broadcaster.broadcast_state(self.snapshot()).await;
                        }
                        SessionCommand::Turn(direction) => {
                            self.turn(direction);
                        }
                    }
                }
            }
        }

        log!("Session stopped at tick {}", self.tick);
    }

    fn advance(&mut self) -> Option<(DeathReason, u32)> {
        if self.game_state.is_over() {
            return None;
        }

        self.tick += 1;
        match self.game_state.advance(&mut self.rng) {
            TickOutcome::Died { reason, score } => Some((reason, score)),
            TickOutcome::Moved | TickOutcome::AteApple { .. } | TickOutcome::GameOver => None,
        }
    }

    /// Score file I/O runs on the blocking pool.
    async fn finish(&self, reason: DeathReason, score: u32) -> GameOverNotification {
        let best_scores = Arc::clone(&self.best_scores);
        let task = tokio::task::spawn_blocking(move || record_best_score(&best_scores, score));
        let (is_new_best, best_score) = match task.await {
            Ok(result) => result,
            Err(e) => {
                log!("Best score task failed: {}", e);
                (false, score)
            }
        };
        self.game_over(reason, score, is_new_best, best_score)
    }

    fn game_over(
        &self,
        reason: DeathReason,
        score: u32,
        is_new_best: bool,
        best_score: u32,
    ) -> GameOverNotification {
        if is_new_best {
            log!("New best score: {}", best_score);
        }

        GameOverNotification {
            score,
            best_score,
            is_new_best,
            reason,
            tick: self.tick,
        }
    }
}

/// Returns whether `score` is a new best, and the best score after recording it.
fn record_best_score<P: ConfigContentProvider>(
    best_scores: &BestScoreStore<P>,
    score: u32,
) -> (bool, u32) {
    let is_new_best = match best_scores.record(score) {
        Ok(is_new_best) => is_new_best,
        Err(e) => {
            log!("Failed to save best score: {}", e);
            false
        }
    };
    let best_score = match best_scores.best_score() {
        Ok(best) => best.max(score),
        Err(e) => {
            log!("Failed to read best score: {}", e);
            score
        }
    };
    (is_new_best, best_score)
}

/// First tick fires one full period after start, never in a burst.
fn new_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
