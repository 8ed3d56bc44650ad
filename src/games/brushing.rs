use super::{Backing, Recorded, Tally};
use crate::errors::ArcadeError;
use crate::models::SessionType;
use crate::storage::keys;

pub const BRUSHING_GOAL: u32 = 2;

#[derive(Debug, Default)]
pub struct Brushing {
    sessions: Tally,
}

impl Brushing {
    pub fn with_count(sessions: Tally) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> u32 {
        self.sessions.value()
    }

    pub fn tally(&self) -> Tally {
        self.sessions
    }

    pub async fn log_session(
        &mut self,
        backing: &mut Backing,
        session_type: SessionType,
    ) -> Result<Recorded, ArcadeError> {
        backing.require_session()?;
        let degraded = match backing.gateway() {
            Some(gateway) => {
                let result = gateway
                    .log_brushing(session_type)
                    .await
                    .map(|response| response.total_today.unwrap_or(self.sessions() + 1));
                self.sessions.settle(result)?
            }
            None => {
                self.sessions.bump();
                backing.save(keys::BRUSH_COUNT, self.sessions()).await
            }
        };
        Ok(Recorded {
            total: self.sessions(),
            degraded,
        })
    }

    pub fn reconcile(&mut self, total: u32) {
        self.sessions.reconcile(total);
    }

    pub async fn reset(&mut self, backing: &mut Backing) -> Result<(), ArcadeError> {
        backing.require_session()?;
        match backing.gateway() {
            Some(gateway) => {
                gateway.reset_brushing().await?;
                self.sessions.reconcile(0);
            }
            None => {
                self.sessions.zero();
                backing.store_mut().put(keys::BRUSH_COUNT, 0).await?;
            }
        }
        Ok(())
    }

    pub(crate) fn zero(&mut self) {
        self.sessions.zero();
    }
}

pub fn routine_notice(session_type: SessionType) -> &'static str {
    match session_type {
        SessionType::Morning => "Morning routine complete! 😊",
        SessionType::Night => "Night routine complete! Good night, Sparkle Hero! 🌙",
    }
}
