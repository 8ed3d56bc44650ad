use crate::errors::ArcadeError;
use crate::games::GameKind;
use crate::models::{
    BrushRequest, LoginRequest, MoodRequest, RegisterRequest, TileRequest, User, WordRequest,
};
use crate::state::AppState;
use crate::timers;
use crate::ui::render_index;
use crate::view::Frame;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

type FrameResult = Result<Json<Frame>, ArcadeError>;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let arcade = state.session().await;
    Html(render_index(&arcade.summary(), arcade.user()))
}

pub async fn dashboard(State(state): State<AppState>) -> Json<Frame> {
    let mut arcade = state.session().await;
    Json(arcade.show_dashboard())
}

pub async fn open_game(State(state): State<AppState>, Path(name): Path<String>) -> FrameResult {
    let kind: GameKind = name.parse()?;
    let mut arcade = state.session().await;
    Ok(Json(arcade.show_game(kind)))
}

/// Current frame without navigating. Polled while timers run.
pub async fn view(State(state): State<AppState>) -> Json<Frame> {
    let arcade = state.session().await;
    Json(arcade.frame())
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> FrameResult {
    let username = payload.username.trim();
    if username.is_empty() || payload.password.is_empty() {
        return Err(ArcadeError::rejected("username and password are required"));
    }
    let mut arcade = state.session().await;
    let frame = arcade
        .register(username, payload.email.trim(), &payload.password)
        .await?;
    Ok(Json(frame))
}

pub async fn login(State(state): State<AppState>, Json(payload): Json<LoginRequest>) -> FrameResult {
    let mut arcade = state.session().await;
    let frame = arcade.login(payload.username.trim(), &payload.password).await?;
    Ok(Json(frame))
}

pub async fn logout(State(state): State<AppState>) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.logout().await?))
}

pub async fn current_user(State(state): State<AppState>) -> Result<Json<User>, ArcadeError> {
    let arcade = state.session().await;
    Ok(Json(arcade.current_user().await?))
}

pub async fn log_glass(State(state): State<AppState>) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.log_glass().await?))
}

pub async fn reset_hydration(State(state): State<AppState>) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.reset_hydration().await?))
}

pub async fn log_brushing(
    State(state): State<AppState>,
    Json(payload): Json<BrushRequest>,
) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.log_brushing(payload.session_type).await?))
}

pub async fn reset_brushing(State(state): State<AppState>) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.reset_brushing().await?))
}

pub async fn start_breathing(State(state): State<AppState>) -> FrameResult {
    Ok(Json(timers::start_breathing(&state.arcade).await?))
}

pub async fn start_sprint(State(state): State<AppState>) -> FrameResult {
    Ok(Json(timers::start_sprint(&state.arcade).await?))
}

pub async fn sprint_tile(
    State(state): State<AppState>,
    Json(payload): Json<TileRequest>,
) -> FrameResult {
    Ok(Json(timers::record_tile(&state.arcade, payload.id).await?))
}

pub async fn next_scenario(State(state): State<AppState>) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.next_scenario()?))
}

pub async fn select_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.select_mood(&payload.mood).await?))
}

pub async fn add_word(State(state): State<AppState>, Json(payload): Json<WordRequest>) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.add_word(payload.word.trim())?))
}

pub async fn clear_affirmation(State(state): State<AppState>) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.clear_affirmation()?))
}

pub async fn generate_affirmation(State(state): State<AppState>) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.generate_affirmation().await?))
}

pub async fn reset_stats(State(state): State<AppState>) -> FrameResult {
    let mut arcade = state.session().await;
    Ok(Json(arcade.reset_stats().await?))
}
