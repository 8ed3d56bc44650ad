use crate::games::affirmation::{Affirmation, WORD_BANK};
use crate::games::breathing::{Breathing, Phase, EXERCISE_SECONDS};
use crate::games::brushing::{Brushing, BRUSHING_GOAL};
use crate::games::hydration::{Hydration, DAILY_CAP, WATER_GOAL};
use crate::games::mood::{Mood, MoodWatch};
use crate::games::sprint::{Sprint, Turn};
use crate::games::{GameKind, Games, TallySource};
use crate::models::User;
use crate::stats::DashboardSummary;
use serde::Serialize;

pub const MAX_PLANT_LEVEL: u32 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrationView {
    pub glasses: u32,
    pub goal: u32,
    pub level: u32,
    pub status: String,
    pub can_log: bool,
    pub source: TallySource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrushingView {
    pub sessions: u32,
    pub goal: u32,
    pub face: &'static str,
    pub status: &'static str,
    pub glowing: bool,
    pub source: TallySource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreathingView {
    pub running: bool,
    pub elapsed: u32,
    pub total: u32,
    pub cue: &'static str,
    pub circle: &'static str,
    pub start_enabled: bool,
    pub sessions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprintView {
    pub turn: Turn,
    pub score: u32,
    pub high_score: u32,
    pub message: String,
    pub highlighted: Option<u8>,
    pub tiles_enabled: bool,
    pub start_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodView {
    pub scenario: Option<&'static str>,
    pub options: Vec<Mood>,
    pub selected: Option<Mood>,
    pub tip: Option<&'static str>,
    pub options_enabled: bool,
    pub completed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordChoice {
    pub word: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffirmationView {
    pub words: Vec<WordChoice>,
    pub draft: String,
    pub generated: Option<String>,
    pub can_generate: bool,
    pub created: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "game", rename_all = "lowercase")]
pub enum GameView {
    Hydration(HydrationView),
    Brushing(BrushingView),
    Breathing(BreathingView),
    Sprint(SprintView),
    Mood(MoodView),
    Affirmation(AffirmationView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub message: String,
    pub kind: BannerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum ScreenView {
    Dashboard {
        summary: DashboardSummary,
    },
    Game {
        title: &'static str,
        #[serde(flatten)]
        view: GameView,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    #[serde(flatten)]
    pub screen: ScreenView,
    pub banner: Option<Banner>,
    pub user: Option<User>,
}

pub fn game_view(kind: GameKind, games: &Games) -> GameView {
    match kind {
        GameKind::Hydration => GameView::Hydration(hydration_view(&games.hydration)),
        GameKind::Brushing => GameView::Brushing(brushing_view(&games.brushing)),
        GameKind::Breathing => GameView::Breathing(breathing_view(&games.breathing)),
        GameKind::Sprint => GameView::Sprint(sprint_view(&games.sprint)),
        GameKind::Mood => GameView::Mood(mood_view(&games.mood)),
        GameKind::Affirmation => GameView::Affirmation(affirmation_view(&games.affirmation)),
    }
}

pub fn plant_level(glasses: u32) -> u32 {
    glasses.min(MAX_PLANT_LEVEL)
}

pub fn hydration_view(hydration: &Hydration) -> HydrationView {
    let glasses = hydration.glasses();
    let status = if glasses >= WATER_GOAL {
        "🥳 Fully Revived! You're a true Hydration Hero!".to_string()
    } else if glasses > 0 {
        format!("🌱 Growing stronger! Need {} more.", WATER_GOAL - glasses)
    } else {
        "Your little sprout is thirsty...".to_string()
    };
    HydrationView {
        glasses,
        goal: WATER_GOAL,
        level: plant_level(glasses),
        status,
        can_log: glasses < DAILY_CAP,
        source: hydration.tally().source(),
    }
}

pub fn brushing_view(brushing: &Brushing) -> BrushingView {
    let sessions = brushing.sessions();
    let (face, status) = match sessions {
        0 => ("😐", "Time to brush and make those teeth happy!"),
        1 => ("😊", "Good start! Keep brushing for healthy teeth."),
        2 | 3 => ("😁", "Maximum Sparkle! Teeth are happy!"),
        _ => ("🤩", "Ultimate Sparkle! Super clean teeth! 🌟"),
    };
    BrushingView {
        sessions,
        goal: BRUSHING_GOAL,
        face,
        status,
        glowing: sessions >= BRUSHING_GOAL,
        source: brushing.tally().source(),
    }
}

pub fn breathing_view(breathing: &Breathing) -> BreathingView {
    match breathing.run() {
        Some(run) => {
            let phase = run.phase();
            BreathingView {
                running: true,
                elapsed: run.elapsed,
                total: EXERCISE_SECONDS,
                cue: phase.cue(),
                circle: match phase {
                    Phase::Inhale => "breathing-in",
                    Phase::HoldInhaled => "breathing-hold-inhaled",
                    Phase::Exhale => "breathing-out",
                    Phase::HoldExhaled => "breathing-hold-exhaled",
                },
                start_enabled: false,
                sessions: breathing.sessions(),
            }
        }
        None => BreathingView {
            running: false,
            elapsed: 0,
            total: EXERCISE_SECONDS,
            cue: if breathing.just_completed() { "Completed!" } else { "Start" },
            circle: "breathing-paused",
            start_enabled: true,
            sessions: breathing.sessions(),
        },
    }
}

pub fn sprint_view(sprint: &Sprint) -> SprintView {
    let message = match sprint.turn() {
        Turn::Idle => "Press Start to begin!".to_string(),
        Turn::Showing if sprint.score() > 0 && sprint.sequence().len() == sprint.score() as usize => {
            "Correct! Next round...".to_string()
        }
        Turn::Showing => "Watch the sequence...".to_string(),
        Turn::PlayerTurn => "Your turn! Click the tiles in order.".to_string(),
        Turn::GameOver if sprint.score() > 0 => format!(
            "Game over! You scored {}. Great job! You remembered the sequence!",
            sprint.score()
        ),
        Turn::GameOver => "Game over! Better luck next time!".to_string(),
    };
    SprintView {
        turn: sprint.turn(),
        score: sprint.score(),
        high_score: sprint.high_score(),
        message,
        highlighted: sprint.highlighted(),
        tiles_enabled: sprint.turn() == Turn::PlayerTurn,
        start_enabled: matches!(sprint.turn(), Turn::Idle | Turn::GameOver),
    }
}

pub fn mood_view(mood: &MoodWatch) -> MoodView {
    MoodView {
        scenario: mood.scenario(),
        options: Mood::ALL.to_vec(),
        selected: mood.selected(),
        tip: mood.tip(),
        options_enabled: mood.scenario().is_some() && mood.selected().is_none(),
        completed: mood.completed(),
    }
}

pub fn affirmation_view(affirmation: &Affirmation) -> AffirmationView {
    AffirmationView {
        words: WORD_BANK
            .into_iter()
            .map(|word| WordChoice {
                word,
                available: affirmation.is_available(word),
            })
            .collect(),
        draft: affirmation.selected().join(" "),
        generated: affirmation.generated().map(str::to_string),
        can_generate: !affirmation.selected().is_empty() && affirmation.generated().is_none(),
        created: affirmation.created(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Tally;

    #[test]
    fn plant_grows_one_stage_per_glass_up_to_seven() {
        let levels: Vec<u32> = (0..=12).map(plant_level).collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4, 5, 6, 7, 7, 7, 7, 7, 7]);
    }

    #[test]
    fn hydration_status_tracks_the_goal() {
        let view = hydration_view(&Hydration::with_count(Tally::local(3)));
        assert_eq!(view.status, "🌱 Growing stronger! Need 5 more.");
        assert!(view.can_log);

        let view = hydration_view(&Hydration::with_count(Tally::local(12)));
        assert!(view.status.contains("Fully Revived"));
        assert!(!view.can_log);
    }

    #[test]
    fn brushing_thresholds() {
        let face = |count| brushing_view(&Brushing::with_count(Tally::local(count))).face;
        assert_eq!(face(0), "😐");
        assert_eq!(face(1), "😊");
        assert_eq!(face(2), "😁");
        assert_eq!(face(3), "😁");
        assert_eq!(face(4), "🤩");
        assert_eq!(face(9), "🤩");
    }

    #[test]
    fn idle_breathing_view_offers_start() {
        let view = breathing_view(&Breathing::default());
        assert!(view.start_enabled);
        assert_eq!(view.cue, "Start");
        assert_eq!(view.circle, "breathing-paused");
    }

    #[test]
    fn idle_sprint_disables_tiles() {
        let view = sprint_view(&Sprint::with_high_score(3));
        assert!(!view.tiles_enabled);
        assert!(view.start_enabled);
        assert_eq!(view.high_score, 3);
    }

    #[test]
    fn affirmation_view_marks_used_words() {
        let mut affirmation = Affirmation::default();
        affirmation.add_word("brave").unwrap();
        let view = affirmation_view(&affirmation);
        assert_eq!(view.words.len(), WORD_BANK.len());
        let brave = view.words.iter().find(|choice| choice.word == "brave").unwrap();
        assert!(!brave.available);
        assert!(view.can_generate);
        assert_eq!(view.draft, "brave");
    }
}
