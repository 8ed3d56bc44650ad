use super::{Backing, Tally};
use crate::errors::ArcadeError;
use crate::storage::keys;
use tracing::info;

pub const WATER_GOAL: u32 = 8;
pub const DAILY_CAP: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlassLogged {
    pub glasses: u32,
    /// True only on the call that crossed the goal.
    pub goal_reached: bool,
    /// The daily cap was already hit; nothing was recorded.
    pub capped: bool,
    pub degraded: Option<ArcadeError>,
}

#[derive(Debug, Default)]
pub struct Hydration {
    glasses: Tally,
    goal_announced: bool,
}

impl Hydration {
    pub fn with_count(glasses: Tally) -> Self {
        let glasses = Tally {
            value: glasses.value().min(DAILY_CAP),
            ..glasses
        };
        Self {
            goal_announced: glasses.value() >= WATER_GOAL,
            glasses,
        }
    }

    pub fn glasses(&self) -> u32 {
        self.glasses.value()
    }

    pub fn tally(&self) -> Tally {
        self.glasses
    }

    pub async fn log_glass(&mut self, backing: &mut Backing) -> Result<GlassLogged, ArcadeError> {
        backing.require_session()?;
        if self.glasses() >= DAILY_CAP {
            return Ok(GlassLogged {
                glasses: self.glasses(),
                goal_reached: false,
                capped: true,
                degraded: None,
            });
        }

        let degraded = match backing.gateway() {
            Some(gateway) => {
                let result = gateway.log_hydration(1).await.map(|response| {
                    response
                        .total_today
                        .unwrap_or(self.glasses() + 1)
                        .min(DAILY_CAP)
                });
                self.glasses.settle(result)?
            }
            None => {
                self.glasses.bump();
                backing.save(keys::WATER_LOGGED, self.glasses()).await
            }
        };

        let goal_reached = self.announce_goal();
        if goal_reached {
            info!(glasses = self.glasses(), "hydration goal reached");
        }
        Ok(GlassLogged {
            glasses: self.glasses(),
            goal_reached,
            capped: false,
            degraded,
        })
    }

    pub fn reconcile(&mut self, total: u32) {
        self.glasses.reconcile(total.min(DAILY_CAP));
        self.goal_announced = self.glasses() >= WATER_GOAL;
    }

    pub async fn reset(&mut self, backing: &mut Backing) -> Result<(), ArcadeError> {
        backing.require_session()?;
        match backing.gateway() {
            Some(gateway) => {
                gateway.reset_hydration().await?;
                self.glasses.reconcile(0);
            }
            None => {
                self.glasses.zero();
                backing.store_mut().put(keys::WATER_LOGGED, 0).await?;
            }
        }
        self.goal_announced = false;
        Ok(())
    }

    pub(crate) fn zero(&mut self) {
        self.glasses.zero();
        self.goal_announced = false;
    }

    fn announce_goal(&mut self) -> bool {
        if self.goal_announced || self.glasses() < WATER_GOAL {
            return false;
        }
        self.goal_announced = true;
        true
    }
}
