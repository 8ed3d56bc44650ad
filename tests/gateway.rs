mod support;

use std::time::Duration;
use support::{MockBackend, PASSWORD, TOKEN};
use wellness_arcade::{
    games::{Backing, GameKind, TallySource},
    gateway::Gateway,
    storage::{keys, LocalStore},
    Arcade, ArcadeError,
};

fn scratch_path(label: &str) -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "wellness_arcade_gateway_{label}_{}_{nanos}.json",
        std::process::id()
    ))
}

async fn remote_arcade(backend: &MockBackend, label: &str, token: Option<&str>) -> Arcade {
    let gateway = Gateway::new(&backend.base_url, Duration::from_secs(5))
        .unwrap()
        .with_token(token.map(str::to_string));
    let store = LocalStore::open(scratch_path(label)).await;
    Arcade::new(Backing::remote(gateway, store))
}

#[tokio::test]
async fn login_remembers_the_token_and_loads_totals() {
    let backend = MockBackend::start().await;
    backend.set_total("hydration", 5);
    backend.set_total("high_score", 6);
    let mut arcade = remote_arcade(&backend, "login", None).await;

    let frame = arcade.login("ada", PASSWORD).await.unwrap();
    assert_eq!(frame.user.as_ref().map(|user| user.username.as_str()), Some("ada"));
    assert!(arcade.is_authenticated());
    assert_eq!(arcade.backing().store().get(keys::SESSION_TOKEN), Some(TOKEN));
    assert_eq!(arcade.games().hydration.glasses(), 5);
    assert_eq!(arcade.games().sprint.high_score(), 6);
}

#[tokio::test]
async fn backend_detail_is_surfaced_verbatim() {
    let backend = MockBackend::start().await;
    let mut arcade = remote_arcade(&backend, "bad_login", None).await;

    let err = arcade.login("ada", "wrong").await.unwrap_err();
    assert_eq!(
        err,
        ArcadeError::Api {
            status: 401,
            detail: "Invalid credentials".to_string()
        }
    );
    assert!(!arcade.is_authenticated());
}

#[tokio::test]
async fn logging_reconciles_with_the_server_total() {
    let backend = MockBackend::start().await;
    let mut arcade = remote_arcade(&backend, "reconcile", Some(TOKEN)).await;
    arcade.restore_session().await;
    backend.set_total("hydration", 4);

    arcade.show_game(GameKind::Hydration);
    arcade.log_glass().await.unwrap();

    let tally = arcade.games().hydration.tally();
    assert_eq!(tally.value(), 5);
    assert_eq!(tally.source(), TallySource::Server);
    assert!(backend.paths().contains(&"/api/hydration/log/".to_string()));
}

#[tokio::test]
async fn unauthenticated_actions_never_reach_the_backend() {
    let backend = MockBackend::start().await;
    let mut arcade = remote_arcade(&backend, "unauth", None).await;

    arcade.show_game(GameKind::Hydration);
    assert_eq!(arcade.log_glass().await.unwrap_err(), ArcadeError::Unauthenticated);
    arcade.show_game(GameKind::Breathing);
    assert_eq!(arcade.start_breathing().unwrap_err(), ArcadeError::Unauthenticated);
    arcade.show_game(GameKind::Affirmation);
    arcade.add_word("I").unwrap();
    assert_eq!(
        arcade.generate_affirmation().await.unwrap_err(),
        ArcadeError::Unauthenticated
    );

    assert_eq!(backend.requests(), 0);
    assert_eq!(arcade.games().hydration.glasses(), 0);
    assert_eq!(arcade.games().affirmation.created(), 0);
}

#[tokio::test]
async fn failing_backend_falls_back_to_an_optimistic_count() {
    let backend = MockBackend::start().await;
    let mut arcade = remote_arcade(&backend, "optimistic", Some(TOKEN)).await;
    arcade.restore_session().await;
    backend.set_total("brushing", 1);
    arcade.load_wellness_data().await;

    backend.set_failing(true);
    arcade.show_game(GameKind::Brushing);
    let frame = arcade
        .log_brushing(wellness_arcade::models::SessionType::Night)
        .await
        .unwrap();

    let tally = arcade.games().brushing.tally();
    assert_eq!(tally.value(), 2);
    assert_eq!(tally.source(), TallySource::Optimistic);
    assert!(frame.banner.is_some());
    assert!(arcade.summary().unsynced);

    backend.set_failing(false);
    arcade.load_wellness_data().await;
    assert_eq!(arcade.games().brushing.tally().source(), TallySource::Server);
    assert_eq!(arcade.games().brushing.sessions(), 1);
}

#[tokio::test]
async fn failed_load_leaves_counters_at_zero() {
    let backend = MockBackend::start().await;
    let mut arcade = remote_arcade(&backend, "failed_load", Some(TOKEN)).await;
    backend.set_total("hydration", 3);
    arcade.restore_session().await;
    assert_eq!(arcade.games().hydration.glasses(), 3);

    backend.set_failing(true);
    arcade.load_wellness_data().await;
    assert_eq!(arcade.games().hydration.glasses(), 0);
}

#[tokio::test]
async fn stale_token_is_dropped_on_restore() {
    let backend = MockBackend::start().await;
    let mut arcade = remote_arcade(&backend, "stale", Some("expired")).await;

    arcade.restore_session().await;
    assert!(!arcade.is_authenticated());
    assert!(arcade.user().is_none());
}

#[tokio::test]
async fn logout_forgets_the_session() {
    let backend = MockBackend::start().await;
    let mut arcade = remote_arcade(&backend, "logout", None).await;
    backend.set_total("mood", 2);
    arcade.login("ada", PASSWORD).await.unwrap();
    assert_eq!(arcade.games().mood.completed(), 2);

    arcade.logout().await.unwrap();
    assert!(!arcade.is_authenticated());
    assert!(arcade.backing().store().get(keys::SESSION_TOKEN).is_none());
    assert_eq!(arcade.games().mood.completed(), 0);
    assert!(backend.paths().contains(&"/api/logout/".to_string()));
}

#[tokio::test]
async fn mood_and_affirmation_reconcile_from_status() {
    let backend = MockBackend::start().await;
    let mut arcade = remote_arcade(&backend, "status", Some(TOKEN)).await;
    arcade.restore_session().await;
    backend.set_total("mood", 3);

    arcade.show_game(GameKind::Mood);
    arcade.select_mood("calm").await.unwrap();
    assert_eq!(arcade.games().mood.completed(), 4);

    arcade.show_game(GameKind::Affirmation);
    arcade.add_word("I").unwrap();
    arcade.add_word("thrive").unwrap();
    arcade.generate_affirmation().await.unwrap();
    assert_eq!(arcade.games().affirmation.created(), 1);
}

#[tokio::test]
async fn remote_reset_zeroes_everything() {
    let backend = MockBackend::start().await;
    backend.set_total("hydration", 7);
    backend.set_total("breathing", 2);
    let mut arcade = remote_arcade(&backend, "reset", Some(TOKEN)).await;
    arcade.restore_session().await;
    assert_eq!(arcade.games().breathing.sessions(), 2);

    arcade.reset_stats().await.unwrap();
    assert_eq!(arcade.games().hydration.glasses(), 0);
    assert_eq!(arcade.games().breathing.sessions(), 0);
    assert_eq!(backend.total("hydration"), 0);
}

#[tokio::test]
async fn ping_checks_the_greeting() {
    let backend = MockBackend::start().await;
    let gateway = Gateway::new(&backend.base_url, Duration::from_secs(5)).unwrap();
    assert!(gateway.ping().await);

    let unreachable = Gateway::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    assert!(!unreachable.ping().await);
}

#[tokio::test]
async fn read_only_endpoints_decode() {
    let backend = MockBackend::start().await;
    backend.set_total("brushing", 1);
    let gateway = Gateway::new(&backend.base_url, Duration::from_secs(5))
        .unwrap()
        .with_token(Some(TOKEN.to_string()));

    let detailed = gateway.brushing_detailed().await.unwrap();
    assert!(detailed.morning_completed);
    assert!(!detailed.night_completed);

    let puzzles = gateway.puzzles().await.unwrap();
    assert_eq!(puzzles.puzzles[0].id, "brain_sprint");

    let scenario = gateway.emotion_scenario().await.unwrap();
    assert_eq!(scenario.id, "scenario_1");
    assert_eq!(gateway.emotion_tip("calm").await.unwrap().tip, "Tip for calm");

    assert_eq!(gateway.affirmation_words().await.unwrap().words.len(), 3);
    let generated = gateway.generate_affirmation(&["I", "am", "brave"]).await.unwrap();
    assert_eq!(generated.generated_affirmation, "I am brave.");

    let tip = gateway.daily_tip().await.unwrap();
    assert_eq!(tip.tip, "Take deep breaths throughout the day.");
    assert_eq!(tip.date.as_deref(), Some("2026-10-19"));

    assert!(gateway.affirmation_history().await.unwrap().history.is_empty());
    gateway.submit_affirmation(&["I", "grow"], "\"I grow.\"").await.unwrap();
    assert_eq!(gateway.affirmation_history().await.unwrap().history.len(), 1);
}

#[tokio::test]
async fn current_user_without_a_token_makes_no_call() {
    let backend = MockBackend::start().await;
    let gateway = Gateway::new(&backend.base_url, Duration::from_secs(5)).unwrap();
    assert_eq!(gateway.current_user().await.unwrap_err(), ArcadeError::Unauthenticated);
    assert_eq!(backend.requests(), 0);
}

#[tokio::test]
async fn logout_does_not_leak_the_high_score_into_the_next_login() {
    let backend = MockBackend::start().await;
    backend.set_total("high_score", 5);
    let mut arcade = remote_arcade(&backend, "high_score_leak", None).await;

    arcade.login("ada", PASSWORD).await.unwrap();
    assert_eq!(arcade.games().sprint.high_score(), 5);

    arcade.logout().await.unwrap();
    assert_eq!(arcade.games().sprint.high_score(), 0);

    backend.set_total("high_score", 0);
    arcade.login("bob", PASSWORD).await.unwrap();
    assert_eq!(arcade.games().sprint.high_score(), 0);
    assert_eq!(arcade.summary().brain_high_score, 0);
}

#[tokio::test]
async fn failed_profile_fetch_leaves_the_session_logged_out() {
    let backend = MockBackend::start().await;
    backend.fail_path("/api/user/");
    let mut arcade = remote_arcade(&backend, "profile_fails", None).await;

    let err = arcade.login("ada", PASSWORD).await.unwrap_err();
    assert!(matches!(err, ArcadeError::Api { status: 500, .. }));
    assert!(!arcade.is_authenticated());
    assert!(arcade.user().is_none());
    assert!(arcade.backing().store().get(keys::SESSION_TOKEN).is_none());

    let before = backend.requests();
    arcade.show_game(GameKind::Hydration);
    assert_eq!(arcade.log_glass().await.unwrap_err(), ArcadeError::Unauthenticated);
    assert_eq!(backend.requests(), before);
}
