use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/arcade/dashboard", get(handlers::dashboard))
        .route("/arcade/games/:name", post(handlers::open_game))
        .route("/arcade/view", get(handlers::view))
        .route("/arcade/register", post(handlers::register))
        .route("/arcade/login", post(handlers::login))
        .route("/arcade/logout", post(handlers::logout))
        .route("/arcade/user", get(handlers::current_user))
        .route("/arcade/hydration/log", post(handlers::log_glass))
        .route("/arcade/hydration/reset", post(handlers::reset_hydration))
        .route("/arcade/brushing/log", post(handlers::log_brushing))
        .route("/arcade/brushing/reset", post(handlers::reset_brushing))
        .route("/arcade/breathing/start", post(handlers::start_breathing))
        .route("/arcade/sprint/start", post(handlers::start_sprint))
        .route("/arcade/sprint/tile", post(handlers::sprint_tile))
        .route("/arcade/mood/next", post(handlers::next_scenario))
        .route("/arcade/mood/select", post(handlers::select_mood))
        .route("/arcade/affirmation/word", post(handlers::add_word))
        .route("/arcade/affirmation/clear", post(handlers::clear_affirmation))
        .route("/arcade/affirmation/generate", post(handlers::generate_affirmation))
        .route("/arcade/stats/reset", post(handlers::reset_stats))
        .with_state(state)
}
