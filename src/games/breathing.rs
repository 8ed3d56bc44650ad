use super::{Backing, Recorded, Tally};
use crate::errors::ArcadeError;
use crate::storage::keys;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

pub const EXERCISE_SECONDS: u32 = 16;
pub const TICK: Duration = Duration::from_secs(1);
const PHASE_SECONDS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Inhale,
    HoldInhaled,
    Exhale,
    HoldExhaled,
}

impl Phase {
    pub fn at(elapsed: u32) -> Self {
        match elapsed / PHASE_SECONDS {
            0 => Self::Inhale,
            1 => Self::HoldInhaled,
            2 => Self::Exhale,
            _ => Self::HoldExhaled,
        }
    }

    pub fn cue(self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::HoldInhaled | Self::HoldExhaled => "Hold breath",
            Self::Exhale => "Exhale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingRun {
    pub elapsed: u32,
}

impl BreathingRun {
    pub fn phase(&self) -> Phase {
        Phase::at(self.elapsed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Idle,
    Running { elapsed: u32, phase: Phase },
    Completed(Recorded),
}

#[derive(Debug, Default)]
pub struct Breathing {
    sessions: Tally,
    run: Option<BreathingRun>,
    just_completed: bool,
}

impl Breathing {
    pub fn with_count(sessions: Tally) -> Self {
        Self {
            sessions,
            ..Self::default()
        }
    }

    pub fn sessions(&self) -> u32 {
        self.sessions.value()
    }

    pub fn tally(&self) -> Tally {
        self.sessions
    }

    pub fn run(&self) -> Option<BreathingRun> {
        self.run
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn just_completed(&self) -> bool {
        self.just_completed
    }

    pub fn start(&mut self, backing: &Backing) -> Result<BreathingRun, ArcadeError> {
        backing.require_session()?;
        if self.run.is_some() {
            return Err(ArcadeError::rejected("A breathing exercise is already running"));
        }
        let run = BreathingRun { elapsed: 0 };
        self.run = Some(run);
        self.just_completed = false;
        Ok(run)
    }

    pub async fn tick(&mut self, backing: &mut Backing) -> Result<Tick, ArcadeError> {
        let Some(run) = self.run.as_mut() else {
            return Ok(Tick::Idle);
        };
        run.elapsed += 1;
        if run.elapsed < EXERCISE_SECONDS {
            return Ok(Tick::Running {
                elapsed: run.elapsed,
                phase: run.phase(),
            });
        }

        self.run = None;
        self.just_completed = true;
        let degraded = match backing.gateway() {
            Some(gateway) => {
                let result = gateway
                    .log_breathing(EXERCISE_SECONDS)
                    .await
                    .map(|response| response.total_today.unwrap_or(self.sessions() + 1));
                self.sessions.settle(result)?
            }
            None => {
                self.sessions.bump();
                backing.save(keys::BREATHING_SESSIONS, self.sessions()).await
            }
        };
        info!(sessions = self.sessions(), "breathing exercise completed");
        Ok(Tick::Completed(Recorded {
            total: self.sessions(),
            degraded,
        }))
    }

    pub fn cancel(&mut self) -> bool {
        self.just_completed = false;
        self.run.take().is_some()
    }

    pub fn reconcile(&mut self, total: u32) {
        self.sessions.reconcile(total);
    }

    pub(crate) fn zero(&mut self) {
        self.sessions.zero();
    }
}
