pub mod affirmation;
pub mod breathing;
pub mod brushing;
pub mod hydration;
pub mod mood;
pub mod sprint;

use crate::errors::ArcadeError;
use crate::gateway::Gateway;
use crate::storage::LocalStore;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::{error, warn};

pub use affirmation::Affirmation;
pub use breathing::Breathing;
pub use brushing::Brushing;
pub use hydration::Hydration;
pub use mood::MoodWatch;
pub use sprint::Sprint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Hydration,
    Brushing,
    Breathing,
    Sprint,
    Mood,
    Affirmation,
}

impl GameKind {
    pub const ALL: [GameKind; 6] = [
        Self::Hydration,
        Self::Brushing,
        Self::Breathing,
        Self::Sprint,
        Self::Mood,
        Self::Affirmation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Hydration => "hydration",
            Self::Brushing => "brushing",
            Self::Breathing => "breathing",
            Self::Sprint => "sprint",
            Self::Mood => "mood",
            Self::Affirmation => "affirmation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Hydration => "Hydration Hero",
            Self::Brushing => "Sparkle Smile",
            Self::Breathing => "Breathe & Balance",
            Self::Sprint => "Brain Sprint",
            Self::Mood => "Mood Watch",
            Self::Affirmation => "Affirmation Builder",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GameKind {
    type Err = ArcadeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hydration" => Ok(Self::Hydration),
            "brushing" | "smile" => Ok(Self::Brushing),
            "breathing" | "breathe" => Ok(Self::Breathing),
            "sprint" | "brain" => Ok(Self::Sprint),
            "mood" => Ok(Self::Mood),
            "affirmation" => Ok(Self::Affirmation),
            other => Err(ArcadeError::rejected(format!("unknown game '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TallySource {
    Server,
    /// Incremented locally after a failed backend write; replaced on the next
    /// successful reconciliation.
    Optimistic,
    #[default]
    Local,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    value: u32,
    source: TallySource,
}

impl Tally {
    pub fn local(value: u32) -> Self {
        Self {
            value,
            source: TallySource::Local,
        }
    }

    pub fn server(value: u32) -> Self {
        Self {
            value,
            source: TallySource::Server,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn source(&self) -> TallySource {
        self.source
    }

    pub fn reconcile(&mut self, total: u32) {
        self.value = total;
        self.source = TallySource::Server;
    }

    pub fn bump(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Applies the outcome of a backend write: a total reconciles, a transient
    /// failure falls back to an optimistic increment and is handed back so the
    /// caller can surface it.
    pub fn settle(&mut self, result: Result<u32, ArcadeError>) -> Result<Option<ArcadeError>, ArcadeError> {
        match result {
            Ok(total) => {
                self.reconcile(total);
                Ok(None)
            }
            Err(err) if err.is_transient() => {
                warn!("backend write failed, counting locally: {err}");
                self.value = self.value.saturating_add(1);
                self.source = TallySource::Optimistic;
                Ok(Some(err))
            }
            Err(err) => Err(err),
        }
    }

    pub(crate) fn zero(&mut self) {
        self.value = 0;
    }
}

#[derive(Debug)]
pub struct Backing {
    gateway: Option<Gateway>,
    store: LocalStore,
}

impl Backing {
    pub fn remote(gateway: Gateway, store: LocalStore) -> Self {
        Self {
            gateway: Some(gateway),
            store,
        }
    }

    pub fn standalone(store: LocalStore) -> Self {
        Self {
            gateway: None,
            store,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.gateway.is_some()
    }

    pub fn gateway(&self) -> Option<&Gateway> {
        self.gateway.as_ref()
    }

    pub fn gateway_mut(&mut self) -> Option<&mut Gateway> {
        self.gateway.as_mut()
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LocalStore {
        &mut self.store
    }

    pub fn is_authenticated(&self) -> bool {
        self.gateway.as_ref().is_some_and(Gateway::is_authenticated)
    }

    pub fn require_session(&self) -> Result<(), ArcadeError> {
        match &self.gateway {
            Some(gateway) if !gateway.is_authenticated() => Err(ArcadeError::Unauthenticated),
            _ => Ok(()),
        }
    }

    pub(crate) async fn save(&mut self, key: &str, value: u32) -> Option<ArcadeError> {
        match self.store.put(key, value).await {
            Ok(()) => None,
            Err(err) => {
                error!(key, "failed to persist local value: {err}");
                Some(err)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub total: u32,
    pub degraded: Option<ArcadeError>,
}

#[derive(Debug, Default)]
pub struct Games {
    pub hydration: Hydration,
    pub brushing: Brushing,
    pub breathing: Breathing,
    pub sprint: Sprint,
    pub mood: MoodWatch,
    pub affirmation: Affirmation,
}

impl Games {
    pub fn from_store(store: &LocalStore) -> Self {
        use crate::storage::keys;
        Self {
            hydration: Hydration::with_count(Tally::local(store.count(keys::WATER_LOGGED))),
            brushing: Brushing::with_count(Tally::local(store.count(keys::BRUSH_COUNT))),
            breathing: Breathing::with_count(Tally::local(store.count(keys::BREATHING_SESSIONS))),
            sprint: Sprint::with_high_score(store.count(keys::BRAIN_HIGH_SCORE)),
            mood: MoodWatch::with_count(Tally::local(store.count(keys::MOOD_SCENARIOS))),
            affirmation: Affirmation::with_count(Tally::local(store.count(keys::AFFIRMATIONS_CREATED))),
        }
    }

    /// Zeroes every daily counter. The sprint high score is kept.
    pub fn zero_daily(&mut self) {
        self.hydration.zero();
        self.brushing.zero();
        self.breathing.zero();
        self.mood.zero();
        self.affirmation.zero();
    }
}
