use common::engine::session::{GameOverNotification, SessionCommand};
use common::games::snake::SnakeSnapshot;
use common::log;
use eframe::egui;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum AppState {
    Starting,
    Playing {
        snapshot: SnakeSnapshot,
    },
    GameOver {
        snapshot: SnakeSnapshot,
        notification: GameOverNotification,
    },
}

impl AppState {
    pub fn snapshot(&self) -> Option<&SnakeSnapshot> {
        match self {
            AppState::Starting => None,
            AppState::Playing { snapshot } | AppState::GameOver { snapshot, .. } => Some(snapshot),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State shared between the session thread and the UI thread.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    best_score: Arc<Mutex<u32>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new(best_score: u32) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Starting)),
            best_score: Arc::new(Mutex::new(best_score)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_state(&self) -> AppState {
        lock(&self.state).clone()
    }

    pub fn update_snapshot(&self, snapshot: SnakeSnapshot) {
        let mut state = lock(&self.state);
        *state = match std::mem::replace(&mut *state, AppState::Starting) {
            // A frame from the finished game must not hide the death screen.
            AppState::GameOver { notification, .. } if snapshot.is_over() => {
                AppState::GameOver { snapshot, notification }
            }
            _ => AppState::Playing { snapshot },
        };
        drop(state);
        self.request_repaint();
    }

    pub fn set_game_over(&self, notification: GameOverNotification) {
        {
            let mut best = lock(&self.best_score);
            *best = (*best).max(notification.best_score);
        }

        let mut state = lock(&self.state);
        if let Some(snapshot) = state.snapshot().cloned() {
            *state = AppState::GameOver { snapshot, notification };
        }
        drop(state);
        self.request_repaint();
    }

    pub fn best_score(&self) -> u32 {
        *lock(&self.best_score)
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: SessionCommand) {
        if let Err(e) = self.tx.send(command) {
            log!("Session is gone, dropped command: {:?}", e.0);
        }
    }
}
