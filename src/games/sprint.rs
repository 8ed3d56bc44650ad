use super::Backing;
use crate::errors::ArcadeError;
use crate::storage::keys;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

pub const TILE_COUNT: u8 = 4;
pub const PUZZLE_ID: &str = "brain_sprint";

pub const FIRST_ROUND_DELAY: Duration = Duration::from_millis(1000);
pub const TILE_INTERVAL: Duration = Duration::from_millis(600);
pub const HIGHLIGHT: Duration = Duration::from_millis(500);
pub const TURN_DELAY: Duration = Duration::from_millis(500);
pub const NEXT_ROUND_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    #[default]
    Idle,
    Showing,
    PlayerTurn,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileOutcome {
    Ignored,
    Continue,
    RoundCleared { score: u32 },
    GameOver {
        score: u32,
        high_score: u32,
        degraded: Option<ArcadeError>,
    },
}

#[derive(Debug, Default)]
pub struct Sprint {
    sequence: Vec<u8>,
    input: Vec<u8>,
    turn: Turn,
    score: u32,
    high_score: u32,
    highlighted: Option<u8>,
}

impl Sprint {
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn highlighted(&self) -> Option<u8> {
        self.highlighted
    }

    pub fn start(&mut self, backing: &Backing) -> Result<(), ArcadeError> {
        backing.require_session()?;
        if matches!(self.turn, Turn::Showing | Turn::PlayerTurn) {
            return Err(ArcadeError::rejected("A sprint is already in progress"));
        }
        self.sequence.clear();
        self.input.clear();
        self.score = 0;
        self.highlighted = None;
        self.turn = Turn::Showing;
        Ok(())
    }

    pub fn begin_round<R: Rng>(&mut self, rng: &mut R) -> Vec<u8> {
        self.turn = Turn::Showing;
        self.input.clear();
        self.sequence.push(rng.gen_range(1..=TILE_COUNT));
        self.sequence.clone()
    }

    pub fn highlight(&mut self, tile: Option<u8>) {
        if self.turn == Turn::Showing {
            self.highlighted = tile;
        }
    }

    pub fn open_player_turn(&mut self) {
        if self.turn == Turn::Showing {
            self.highlighted = None;
            self.turn = Turn::PlayerTurn;
        }
    }

    pub async fn record_tile(&mut self, backing: &mut Backing, tile: u8) -> Result<TileOutcome, ArcadeError> {
        if self.turn != Turn::PlayerTurn {
            return Ok(TileOutcome::Ignored);
        }
        if !(1..=TILE_COUNT).contains(&tile) {
            return Err(ArcadeError::rejected(format!("no tile {tile}")));
        }

        self.input.push(tile);
        let position = self.input.len() - 1;
        if self.sequence.get(position) != Some(&tile) {
            return Ok(self.game_over(backing).await);
        }

        if self.input.len() < self.sequence.len() {
            return Ok(TileOutcome::Continue);
        }

        self.score += 1;
        let cleared = std::mem::take(&mut self.input);
        self.turn = Turn::Showing;
        if let Some(gateway) = backing.gateway() {
            if let Err(err) = gateway.submit_puzzle(PUZZLE_ID, &cleared, true).await {
                warn!("failed to log sprint round: {err}");
            }
        }
        Ok(TileOutcome::RoundCleared { score: self.score })
    }

    pub fn abandon(&mut self) {
        self.sequence.clear();
        self.input.clear();
        self.score = 0;
        self.highlighted = None;
        self.turn = Turn::Idle;
    }

    /// Accepts a server high score without ever lowering the local one.
    pub fn reconcile_high_score(&mut self, server: u32) {
        self.high_score = self.high_score.max(server);
    }

    async fn game_over(&mut self, backing: &mut Backing) -> TileOutcome {
        self.turn = Turn::GameOver;
        self.highlighted = None;
        let mut degraded = None;

        if self.score > self.high_score {
            self.high_score = self.score;
            match backing.gateway() {
                Some(gateway) => {
                    let result = match gateway.submit_puzzle(PUZZLE_ID, &[], false).await {
                        Ok(()) => gateway.puzzle_status().await,
                        Err(err) => Err(err),
                    };
                    match result {
                        Ok(status) => self.reconcile_high_score(status.high_score_today),
                        Err(err) => {
                            warn!("failed to log sprint result: {err}");
                            degraded = Some(err);
                        }
                    }
                }
                None => {
                    degraded = backing.save(keys::BRAIN_HIGH_SCORE, self.high_score).await;
                }
            }
        }

        info!(score = self.score, high_score = self.high_score, "sprint over");
        TileOutcome::GameOver {
            score: self.score,
            high_score: self.high_score,
            degraded,
        }
    }
}
