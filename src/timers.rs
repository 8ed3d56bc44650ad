use crate::arcade::Arcade;
use crate::errors::ArcadeError;
use crate::games::breathing::{Tick, TICK};
use crate::games::sprint::{
    TileOutcome, FIRST_ROUND_DELAY, HIGHLIGHT, NEXT_ROUND_DELAY, TILE_INTERVAL, TURN_DELAY,
};
use crate::view::Frame;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::Mutex,
    task::AbortHandle,
    time::{self, Instant},
};
use tracing::{debug, error};

pub type SharedArcade = Arc<Mutex<Arcade>>;

#[derive(Debug, Default)]
pub struct TimerSlot {
    handle: Option<AbortHandle>,
}

impl TimerSlot {
    pub fn arm(&mut self, handle: AbortHandle) {
        self.cancel();
        self.handle = Some(handle);
    }

    /// Aborts the held task. Returns whether it was still running.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let live = !handle.is_finished();
                handle.abort();
                live
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

#[derive(Debug, Default)]
pub struct Timers {
    pub breathing: TimerSlot,
    pub sprint: TimerSlot,
}

impl Timers {
    pub fn cancel_all(&mut self) {
        if self.breathing.cancel() {
            debug!("breathing timer cancelled");
        }
        if self.sprint.cancel() {
            debug!("sprint replay cancelled");
        }
    }
}

pub async fn start_breathing(shared: &SharedArcade) -> Result<Frame, ArcadeError> {
    let mut arcade = shared.lock().await;
    arcade.begin_day().await;
    arcade.start_breathing()?;
    let task = tokio::spawn(run_breathing(Arc::clone(shared)));
    arcade.timers_mut().breathing.arm(task.abort_handle());
    Ok(arcade.frame())
}

async fn run_breathing(shared: SharedArcade) {
    let mut interval = time::interval_at(Instant::now() + TICK, TICK);
    loop {
        interval.tick().await;
        let mut arcade = shared.lock().await;
        match arcade.breathing_tick().await {
            Ok(Tick::Running { .. }) => {}
            Ok(Tick::Idle | Tick::Completed(_)) => break,
            Err(err) => {
                error!("breathing tick failed: {err}");
                break;
            }
        }
    }
}

pub async fn start_sprint(shared: &SharedArcade) -> Result<Frame, ArcadeError> {
    let mut arcade = shared.lock().await;
    arcade.begin_day().await;
    arcade.start_sprint()?;
    schedule_round(&mut arcade, shared, FIRST_ROUND_DELAY);
    Ok(arcade.frame())
}

pub async fn record_tile(shared: &SharedArcade, tile: u8) -> Result<Frame, ArcadeError> {
    let mut arcade = shared.lock().await;
    arcade.begin_day().await;
    if let TileOutcome::RoundCleared { .. } = arcade.record_tile(tile).await? {
        schedule_round(&mut arcade, shared, NEXT_ROUND_DELAY);
    }
    Ok(arcade.frame())
}

fn schedule_round(arcade: &mut Arcade, shared: &SharedArcade, delay: Duration) {
    let task = tokio::spawn(replay_round(Arc::clone(shared), delay));
    arcade.timers_mut().sprint.arm(task.abort_handle());
}

async fn replay_round(shared: SharedArcade, delay: Duration) {
    time::sleep(delay).await;
    let sequence = shared.lock().await.begin_sprint_round();
    for tile in sequence {
        shared.lock().await.highlight_sprint_tile(Some(tile));
        time::sleep(HIGHLIGHT).await;
        shared.lock().await.highlight_sprint_tile(None);
        time::sleep(TILE_INTERVAL.saturating_sub(HIGHLIGHT)).await;
    }
    time::sleep(TURN_DELAY).await;
    shared.lock().await.open_sprint_turn();
}
