use crate::arcade::Arcade;
use crate::timers::SharedArcade;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Clone)]
pub struct AppState {
    pub arcade: SharedArcade,
}

impl AppState {
    pub fn new(arcade: Arcade) -> Self {
        Self {
            arcade: Arc::new(Mutex::new(arcade)),
        }
    }

    pub async fn session(&self) -> MutexGuard<'_, Arcade> {
        let mut arcade = self.arcade.lock().await;
        arcade.begin_day().await;
        arcade
    }
}
