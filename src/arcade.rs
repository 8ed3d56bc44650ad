use crate::errors::ArcadeError;
use crate::games::breathing::Tick;
use crate::games::mood::Mood;
use crate::games::sprint::TileOutcome;
use crate::games::{Backing, GameKind, Games, Recorded, Tally};
use crate::models::{SessionType, User};
use crate::stats::{build_summary, DashboardSummary, Mode};
use crate::storage::keys;
use crate::timers::Timers;
use crate::view::{game_view, Banner, BannerKind, Frame, GameView, ScreenView};
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};

pub const BANNER_TTL_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Dashboard,
    Game(GameKind),
}

#[derive(Debug)]
struct RaisedBanner {
    banner: Banner,
    expires_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct Arcade {
    backing: Backing,
    games: Games,
    user: Option<User>,
    screen: Screen,
    timers: Timers,
    banner: Option<RaisedBanner>,
    rng: StdRng,
}

impl Arcade {
    pub fn new(backing: Backing) -> Self {
        let games = if backing.is_remote() {
            remote_games(0)
        } else {
            Games::from_store(backing.store())
        };
        Self {
            backing,
            games,
            user: None,
            screen: Screen::Dashboard,
            timers: Timers::default(),
            banner: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn games(&self) -> &Games {
        &self.games
    }

    pub fn backing(&self) -> &Backing {
        &self.backing
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut Timers {
        &mut self.timers
    }

    pub fn mode(&self) -> Mode {
        if self.backing.is_remote() {
            Mode::Remote
        } else {
            Mode::Standalone
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.backing.is_authenticated()
    }

    pub async fn restore_session(&mut self) {
        if !self.is_authenticated() {
            return;
        }
        let result = match self.backing.gateway() {
            Some(gateway) => gateway.current_user().await,
            None => return,
        };
        match result {
            Ok(user) => {
                info!(username = %user.username, "session restored");
                self.user = Some(user);
                self.load_wellness_data().await;
            }
            Err(err) => {
                warn!("stored session rejected: {err}");
                self.drop_session().await;
            }
        }
    }

    pub async fn register(&mut self, username: &str, email: &str, password: &str) -> Result<Frame, ArcadeError> {
        let gateway = self.backing.gateway().ok_or_else(accounts_unavailable)?;
        gateway.register(username, email, password).await?;
        self.raise(BannerKind::Success, "Registration successful! Please login.");
        Ok(self.frame())
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<Frame, ArcadeError> {
        let gateway = self.backing.gateway_mut().ok_or_else(accounts_unavailable)?;
        gateway.login(username, password).await?;
        let token = gateway.token().map(str::to_string);
        let user = match gateway.current_user().await {
            Ok(user) => user,
            Err(err) => {
                gateway.forget_token();
                return Err(err);
            }
        };

        if let Some(token) = token {
            if let Err(err) = self.backing.store_mut().put(keys::SESSION_TOKEN, token).await {
                warn!("failed to remember session token: {err}");
            }
        }
        self.user = Some(user);
        self.timers.cancel_all();
        self.games = remote_games(0);
        self.load_wellness_data().await;
        self.raise(BannerKind::Success, "Login successful!");
        Ok(self.frame())
    }

    pub async fn logout(&mut self) -> Result<Frame, ArcadeError> {
        let gateway = self.backing.gateway_mut().ok_or_else(accounts_unavailable)?;
        let remote = gateway.logout().await;
        self.drop_session().await;
        match remote {
            Ok(()) => self.raise(BannerKind::Success, "Logged out successfully!"),
            Err(err) => self.raise(BannerKind::Error, format!("Logout failed: {err}")),
        }
        Ok(self.frame())
    }

    pub async fn current_user(&self) -> Result<User, ArcadeError> {
        let gateway = self.backing.gateway().ok_or_else(accounts_unavailable)?;
        gateway.current_user().await
    }

    pub async fn load_wellness_data(&mut self) {
        let Some(gateway) = self.backing.gateway() else {
            return;
        };
        let statuses = async {
            Ok::<_, ArcadeError>((
                gateway.hydration_status().await?.glasses_today,
                gateway.brushing_status().await?.brushing_today,
                gateway.breathing_status().await?.sessions_today,
                gateway.puzzle_status().await?.high_score_today,
                gateway.emotion_status().await?.scenarios_today,
                gateway.affirmation_status().await?.affirmations_today,
            ))
        }
        .await;

        match statuses {
            Ok((water, brushing, breathing, high_score, moods, affirmations)) => {
                self.games.hydration.reconcile(water);
                self.games.brushing.reconcile(brushing);
                self.games.breathing.reconcile(breathing);
                self.games.sprint.reconcile_high_score(high_score);
                self.games.mood.reconcile(moods);
                self.games.affirmation.reconcile(affirmations);
            }
            Err(err) => {
                warn!("failed to load wellness data: {err}");
                let high_score = self.games.sprint.high_score();
                self.games = remote_games(high_score);
            }
        }
    }

    async fn drop_session(&mut self) {
        if let Some(gateway) = self.backing.gateway_mut() {
            gateway.forget_token();
        }
        if let Err(err) = self.backing.store_mut().remove(keys::SESSION_TOKEN).await {
            warn!("failed to forget session token: {err}");
        }
        self.user = None;
        self.timers.cancel_all();
        self.games = remote_games(0);
    }

    pub async fn begin_day(&mut self) {
        self.begin_day_at(Local::now().date_naive()).await;
    }

    pub async fn begin_day_at(&mut self, today: NaiveDate) {
        if self.backing.is_remote() {
            return;
        }
        match self.backing.store_mut().begin_day(today).await {
            Ok(false) => {}
            Ok(true) => {
                info!(%today, "new day, counters start over");
                self.games.zero_daily();
            }
            Err(err) => {
                warn!("failed to start the new day: {err}");
                self.games.zero_daily();
            }
        }
    }

    pub fn show_dashboard(&mut self) -> Frame {
        self.leave_screen();
        self.screen = Screen::Dashboard;
        self.frame()
    }

    pub fn show_game(&mut self, kind: GameKind) -> Frame {
        self.leave_screen();
        self.screen = Screen::Game(kind);
        if kind == GameKind::Mood {
            self.games.mood.next_scenario(&mut self.rng);
        }
        info!(game = %kind, "game opened");
        self.frame()
    }

    fn leave_screen(&mut self) {
        self.timers.cancel_all();
        self.games.breathing.cancel();
        self.games.sprint.abandon();
    }

    pub fn summary(&self) -> DashboardSummary {
        build_summary(&self.games, self.mode(), self.is_authenticated())
    }

    pub fn frame(&self) -> Frame {
        self.frame_at(Utc::now())
    }

    pub fn frame_at(&self, now: DateTime<Utc>) -> Frame {
        let screen = match self.screen {
            Screen::Dashboard => ScreenView::Dashboard {
                summary: self.summary(),
            },
            Screen::Game(kind) => ScreenView::Game {
                title: kind.title(),
                view: game_view(kind, &self.games),
            },
        };
        Frame {
            screen,
            banner: self.banner_at(now),
            user: self.user.clone(),
        }
    }

    pub fn game_view(&self, kind: GameKind) -> GameView {
        game_view(kind, &self.games)
    }

    pub fn banner_at(&self, now: DateTime<Utc>) -> Option<Banner> {
        self.banner
            .as_ref()
            .filter(|raised| now < raised.expires_at)
            .map(|raised| raised.banner.clone())
    }

    fn raise(&mut self, kind: BannerKind, message: impl Into<String>) {
        self.banner = Some(RaisedBanner {
            banner: Banner {
                message: message.into(),
                kind,
            },
            expires_at: Utc::now() + Duration::seconds(BANNER_TTL_SECS),
        });
    }

    fn raise_degraded(&mut self, degraded: &Option<ArcadeError>) {
        if let Some(err) = degraded {
            self.raise(BannerKind::Error, format!("Saved on this device only: {err}"));
        }
    }

    fn ensure_screen(&self, kind: GameKind) -> Result<(), ArcadeError> {
        if self.screen == Screen::Game(kind) {
            Ok(())
        } else {
            Err(ArcadeError::rejected(format!("Open {} first", kind.title())))
        }
    }

    pub async fn log_glass(&mut self) -> Result<Frame, ArcadeError> {
        self.ensure_screen(GameKind::Hydration)?;
        let logged = self.games.hydration.log_glass(&mut self.backing).await?;
        if logged.capped {
            self.raise(BannerKind::Info, "That's plenty of water for today!");
        } else if logged.goal_reached {
            self.raise(BannerKind::Success, "Goal Reached! You fully revived the plant! 🏆");
        } else if logged.degraded.is_some() {
            self.raise_degraded(&logged.degraded);
        } else if self.backing.is_remote() {
            self.raise(
                BannerKind::Success,
                format!("Logged water! Total today: {}", logged.glasses),
            );
        }
        Ok(self.frame())
    }

    pub async fn reset_hydration(&mut self) -> Result<Frame, ArcadeError> {
        self.ensure_screen(GameKind::Hydration)?;
        self.games.hydration.reset(&mut self.backing).await?;
        Ok(self.frame())
    }

    pub async fn log_brushing(&mut self, session_type: SessionType) -> Result<Frame, ArcadeError> {
        self.ensure_screen(GameKind::Brushing)?;
        let recorded = self
            .games
            .brushing
            .log_session(&mut self.backing, session_type)
            .await?;
        self.report(&recorded, crate::games::brushing::routine_notice(session_type));
        Ok(self.frame())
    }

    pub async fn reset_brushing(&mut self) -> Result<Frame, ArcadeError> {
        self.ensure_screen(GameKind::Brushing)?;
        self.games.brushing.reset(&mut self.backing).await?;
        Ok(self.frame())
    }

    pub fn start_breathing(&mut self) -> Result<(), ArcadeError> {
        self.ensure_screen(GameKind::Breathing)?;
        self.games.breathing.start(&self.backing)?;
        Ok(())
    }

    pub async fn breathing_tick(&mut self) -> Result<Tick, ArcadeError> {
        let tick = self.games.breathing.tick(&mut self.backing).await?;
        if let Tick::Completed(recorded) = &tick {
            self.report(recorded, "Breathing session logged!");
        }
        Ok(tick)
    }

    pub fn start_sprint(&mut self) -> Result<(), ArcadeError> {
        self.ensure_screen(GameKind::Sprint)?;
        self.games.sprint.start(&self.backing)
    }

    pub fn begin_sprint_round(&mut self) -> Vec<u8> {
        self.games.sprint.begin_round(&mut self.rng)
    }

    pub fn highlight_sprint_tile(&mut self, tile: Option<u8>) {
        self.games.sprint.highlight(tile);
    }

    pub fn open_sprint_turn(&mut self) {
        self.games.sprint.open_player_turn();
    }

    pub async fn record_tile(&mut self, tile: u8) -> Result<TileOutcome, ArcadeError> {
        self.ensure_screen(GameKind::Sprint)?;
        let outcome = self.games.sprint.record_tile(&mut self.backing, tile).await?;
        if let TileOutcome::GameOver { score, degraded, .. } = &outcome {
            if degraded.is_some() {
                self.raise_degraded(degraded);
            } else {
                self.raise(BannerKind::Info, format!("Game Over! Final score: {score}"));
            }
        }
        Ok(outcome)
    }

    pub fn next_scenario(&mut self) -> Result<Frame, ArcadeError> {
        self.ensure_screen(GameKind::Mood)?;
        self.games.mood.next_scenario(&mut self.rng);
        Ok(self.frame())
    }

    pub async fn select_mood(&mut self, mood: &str) -> Result<Frame, ArcadeError> {
        self.ensure_screen(GameKind::Mood)?;
        let mood: Mood = mood.parse()?;
        let recorded = self.games.mood.select_mood(&mut self.backing, mood).await?;
        self.raise_degraded(&recorded.degraded);
        Ok(self.frame())
    }

    pub fn add_word(&mut self, word: &str) -> Result<Frame, ArcadeError> {
        self.ensure_screen(GameKind::Affirmation)?;
        self.games.affirmation.add_word(word)?;
        Ok(self.frame())
    }

    pub fn clear_affirmation(&mut self) -> Result<Frame, ArcadeError> {
        self.ensure_screen(GameKind::Affirmation)?;
        self.games.affirmation.clear();
        Ok(self.frame())
    }

    pub async fn generate_affirmation(&mut self) -> Result<Frame, ArcadeError> {
        self.ensure_screen(GameKind::Affirmation)?;
        let recorded = self.games.affirmation.generate(&mut self.backing).await?;
        self.raise_degraded(&recorded.degraded);
        Ok(self.frame())
    }

    pub async fn reset_stats(&mut self) -> Result<Frame, ArcadeError> {
        self.backing.require_session()?;
        match self.backing.gateway() {
            Some(gateway) => {
                gateway.reset_all_stats().await?;
                let high_score = self.games.sprint.high_score();
                self.games = remote_games(high_score);
            }
            None => {
                self.backing.store_mut().clear_daily().await?;
                self.games.zero_daily();
            }
        }
        self.raise(BannerKind::Success, "All stats have been reset!");
        Ok(self.frame())
    }

    fn report(&mut self, recorded: &Recorded, success: &str) {
        if recorded.degraded.is_some() {
            self.raise_degraded(&recorded.degraded);
        } else {
            self.raise(BannerKind::Success, success.to_string());
        }
    }
}

fn accounts_unavailable() -> ArcadeError {
    ArcadeError::rejected("Accounts need a backend; this arcade runs standalone")
}

fn remote_games(high_score: u32) -> Games {
    Games {
        hydration: crate::games::Hydration::with_count(Tally::server(0)),
        brushing: crate::games::Brushing::with_count(Tally::server(0)),
        breathing: crate::games::Breathing::with_count(Tally::server(0)),
        sprint: crate::games::Sprint::with_high_score(high_score),
        mood: crate::games::MoodWatch::with_count(Tally::server(0)),
        affirmation: crate::games::Affirmation::with_count(Tally::server(0)),
    }
}
