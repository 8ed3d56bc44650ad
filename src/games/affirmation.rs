use super::{Backing, Recorded, Tally};
use crate::errors::ArcadeError;
use crate::storage::keys;

pub const WORD_BANK: [&str; 28] = [
    "I", "am", "strong", "capable", "worthy", "loved", "brave", "confident", "peaceful",
    "grateful", "will", "can", "deserve", "choose", "believe", "create", "achieve", "grow",
    "heal", "thrive", "today", "always", "moment", "journey", "life", "future", "present", "now",
];

pub const SUFFIX: &str = "You have the power to create positive change in your life.";

pub fn format_affirmation(words: &[&str]) -> String {
    format!("\"{}.\" - {SUFFIX}", words.join(" "))
}

#[derive(Debug, Default)]
pub struct Affirmation {
    created: Tally,
    selected: Vec<&'static str>,
    generated: Option<String>,
}

impl Affirmation {
    pub fn with_count(created: Tally) -> Self {
        Self {
            created,
            ..Self::default()
        }
    }

    pub fn created(&self) -> u32 {
        self.created.value()
    }

    pub fn tally(&self) -> Tally {
        self.created
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    pub fn is_available(&self, word: &str) -> bool {
        self.generated.is_none() && !self.selected.iter().any(|selected| *selected == word)
    }

    pub fn add_word(&mut self, word: &str) -> Result<(), ArcadeError> {
        let Some(word) = WORD_BANK.iter().copied().find(|candidate| *candidate == word) else {
            return Err(ArcadeError::rejected(format!("'{word}' is not in the word bank")));
        };
        if !self.is_available(word) {
            return Err(ArcadeError::rejected(format!("'{word}' is already used")));
        }
        self.selected.push(word);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.generated = None;
    }

    pub async fn generate(&mut self, backing: &mut Backing) -> Result<Recorded, ArcadeError> {
        backing.require_session()?;
        if self.selected.is_empty() {
            return Err(ArcadeError::rejected("Please select some words first!"));
        }
        if self.generated.is_some() {
            return Err(ArcadeError::rejected("Start a new affirmation first"));
        }

        let text = format_affirmation(&self.selected);
        self.generated = Some(text.clone());

        let degraded = match backing.gateway() {
            Some(gateway) => {
                let result = match gateway.submit_affirmation(&self.selected, &text).await {
                    Ok(()) => gateway
                        .affirmation_status()
                        .await
                        .map(|status| status.affirmations_today),
                    Err(err) => Err(err),
                };
                self.created.settle(result)?
            }
            None => {
                self.created.bump();
                backing.save(keys::AFFIRMATIONS_CREATED, self.created()).await
            }
        };
        Ok(Recorded {
            total: self.created(),
            degraded,
        })
    }

    pub fn reconcile(&mut self, total: u32) {
        self.created.reconcile(total);
    }

    pub(crate) fn zero(&mut self) {
        self.created.zero();
    }
}
