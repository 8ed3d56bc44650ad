use crate::games::brushing::BRUSHING_GOAL;
use crate::games::hydration::WATER_GOAL;
use crate::games::{Games, TallySource};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Remote,
    Standalone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub mode: Mode,
    pub authenticated: bool,
    pub water_logged: u32,
    pub water_goal: u32,
    pub brushing: u32,
    pub brushing_goal: u32,
    pub breathing_sessions: u32,
    pub brain_high_score: u32,
    pub mood_scenarios: u32,
    pub affirmations: u32,
    pub unsynced: bool,
}

pub fn build_summary(games: &Games, mode: Mode, authenticated: bool) -> DashboardSummary {
    let sources = [
        games.hydration.tally().source(),
        games.brushing.tally().source(),
        games.breathing.tally().source(),
        games.mood.tally().source(),
        games.affirmation.tally().source(),
    ];

    DashboardSummary {
        mode,
        authenticated,
        water_logged: games.hydration.glasses(),
        water_goal: WATER_GOAL,
        brushing: games.brushing.sessions(),
        brushing_goal: BRUSHING_GOAL,
        breathing_sessions: games.breathing.sessions(),
        brain_high_score: games.sprint.high_score(),
        mood_scenarios: games.mood.completed(),
        affirmations: games.affirmation.created(),
        unsynced: sources.contains(&TallySource::Optimistic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ArcadeError;
    use crate::games::{Hydration, Sprint, Tally};

    #[test]
    fn summary_reflects_every_controller() {
        let mut games = Games {
            hydration: Hydration::with_count(Tally::local(5)),
            sprint: Sprint::with_high_score(7),
            ..Games::default()
        };
        games.mood.reconcile(2);

        let summary = build_summary(&games, Mode::Standalone, false);
        assert_eq!(summary.water_logged, 5);
        assert_eq!(summary.water_goal, 8);
        assert_eq!(summary.brain_high_score, 7);
        assert_eq!(summary.mood_scenarios, 2);
        assert_eq!(summary.brushing, 0);
        assert!(!summary.unsynced);
    }

    #[test]
    fn optimistic_counters_are_flagged() {
        let mut tally = Tally::server(1);
        tally
            .settle(Err(ArcadeError::Network("timeout".into())))
            .unwrap();
        let games = Games {
            hydration: Hydration::with_count(tally),
            ..Games::default()
        };
        let summary = build_summary(&games, Mode::Remote, true);
        assert_eq!(summary.water_logged, 2);
        assert!(summary.unsynced);
    }

    #[test]
    fn summary_is_a_pure_function_of_state() {
        let games = Games::default();
        assert_eq!(
            build_summary(&games, Mode::Remote, true),
            build_summary(&games, Mode::Remote, true)
        );
    }
}
