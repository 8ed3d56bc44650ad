use super::{Backing, Recorded, Tally};
use crate::errors::ArcadeError;
use crate::storage::keys;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const SCENARIOS: [&str; 10] = [
    "You missed the bus this morning and had to walk to work in the rain.",
    "Your friend surprised you with your favorite coffee.",
    "You received a compliment from your boss about your recent project.",
    "You're stuck in traffic and running late for an important meeting.",
    "You found a $20 bill on the sidewalk.",
    "Your favorite show was cancelled after one season.",
    "You successfully completed a difficult task you've been working on.",
    "You had a disagreement with a close friend.",
    "You discovered a new hobby that you really enjoy.",
    "You're feeling overwhelmed with too many responsibilities.",
];

const SCENARIO_ID: &str = "current_scenario";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Calm,
    Excited,
    Frustrated,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Self::Happy,
        Self::Sad,
        Self::Anxious,
        Self::Calm,
        Self::Excited,
        Self::Frustrated,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Calm => "calm",
            Self::Excited => "excited",
            Self::Frustrated => "frustrated",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            Self::Happy => "It's wonderful to feel happy! Try to savor these positive moments and share your joy with others.",
            Self::Sad => "It's okay to feel sad sometimes. Consider talking to someone you trust or doing something that usually brings you comfort.",
            Self::Anxious => "Anxiety is a normal emotion. Try deep breathing exercises or grounding techniques to help manage these feelings.",
            Self::Calm => "Feeling calm is great for your well-being. This is a good time for reflection or mindfulness practices.",
            Self::Excited => "Excitement can be energizing! Channel this positive energy into productive activities or creative pursuits.",
            Self::Frustrated => "Frustration is a natural response. Try to identify what's causing it and take small steps to address the situation.",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mood {
    type Err = ArcadeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mood| mood.key() == value)
            .ok_or_else(|| ArcadeError::rejected(format!("unknown mood '{value}'")))
    }
}

#[derive(Debug, Default)]
pub struct MoodWatch {
    completed: Tally,
    scenario: Option<&'static str>,
    selected: Option<Mood>,
}

impl MoodWatch {
    pub fn with_count(completed: Tally) -> Self {
        Self {
            completed,
            ..Self::default()
        }
    }

    pub fn completed(&self) -> u32 {
        self.completed.value()
    }

    pub fn tally(&self) -> Tally {
        self.completed
    }

    pub fn scenario(&self) -> Option<&'static str> {
        self.scenario
    }

    pub fn selected(&self) -> Option<Mood> {
        self.selected
    }

    pub fn tip(&self) -> Option<&'static str> {
        self.selected.map(Mood::tip)
    }

    pub fn next_scenario<R: Rng>(&mut self, rng: &mut R) -> &'static str {
        let scenario = SCENARIOS[rng.gen_range(0..SCENARIOS.len())];
        self.scenario = Some(scenario);
        self.selected = None;
        scenario
    }

    pub async fn select_mood(&mut self, backing: &mut Backing, mood: Mood) -> Result<Recorded, ArcadeError> {
        backing.require_session()?;
        if self.scenario.is_none() {
            return Err(ArcadeError::rejected("Pick a scenario first"));
        }
        if self.selected.is_some() {
            return Err(ArcadeError::rejected("Move on to the next scenario to choose again"));
        }
        self.selected = Some(mood);

        let degraded = match backing.gateway() {
            Some(gateway) => {
                let result = match gateway.log_emotion(SCENARIO_ID, mood.key()).await {
                    Ok(()) => gateway
                        .emotion_status()
                        .await
                        .map(|status| status.scenarios_today),
                    Err(err) => Err(err),
                };
                self.completed.settle(result)?
            }
            None => {
                self.completed.bump();
                backing.save(keys::MOOD_SCENARIOS, self.completed()).await
            }
        };
        Ok(Recorded {
            total: self.completed(),
            degraded,
        })
    }

    pub fn reconcile(&mut self, total: u32) {
        self.completed.reconcile(total);
    }

    pub(crate) fn zero(&mut self) {
        self.completed.zero();
    }
}
