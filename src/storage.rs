use crate::errors::ArcadeError;
use chrono::{Local, NaiveDate};
use std::{collections::BTreeMap, env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub mod keys {
    pub const WATER_LOGGED: &str = "waterLogged";
    pub const BRUSH_COUNT: &str = "brushCount";
    pub const BRUSH_MORNING: &str = "brushMorning";
    pub const BRUSH_NIGHT: &str = "brushNight";
    pub const BREATHING_SESSIONS: &str = "breathingSessions";
    pub const BRAIN_HIGH_SCORE: &str = "brainHighScore";
    pub const MOOD_SCENARIOS: &str = "moodScenarios";
    pub const AFFIRMATIONS_CREATED: &str = "affirmationsCreated";
    pub const SESSION_TOKEN: &str = "sessionToken";
    pub const LAST_ACTIVE_DAY: &str = "lastActiveDay";

    pub const DAILY: [&str; 7] = [
        WATER_LOGGED,
        BRUSH_COUNT,
        BRUSH_MORNING,
        BRUSH_NIGHT,
        BREATHING_SESSIONS,
        MOOD_SCENARIOS,
        AFFIRMATIONS_CREATED,
    ];
}

pub type StoreData = BTreeMap<String, String>;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("ARCADE_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/arcade.json")
}

pub async fn load_data(path: &Path) -> StoreData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse store file: {err}");
                StoreData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
        Err(err) => {
            error!("failed to read store file: {err}");
            StoreData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &StoreData) -> Result<(), ArcadeError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(data).map_err(ArcadeError::storage)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    data: StoreData,
}

impl LocalStore {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_at(path, Local::now().date_naive()).await
    }

    pub async fn open_at(path: impl Into<PathBuf>, today: NaiveDate) -> Self {
        let path = path.into();
        let data = load_data(&path).await;
        let mut store = Self { path, data };
        store.migrate_brushing();
        store.roll_over(today);
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn count(&self, key: &str) -> u32 {
        self.get(key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    pub async fn put(&mut self, key: &str, value: impl ToString) -> Result<(), ArcadeError> {
        self.data.insert(key.to_string(), value.to_string());
        self.flush().await
    }

    pub async fn remove(&mut self, key: &str) -> Result<(), ArcadeError> {
        if self.data.remove(key).is_some() {
            self.flush().await?;
        }
        Ok(())
    }

    pub async fn clear_daily(&mut self) -> Result<(), ArcadeError> {
        for key in keys::DAILY {
            self.data.remove(key);
        }
        self.flush().await
    }

    /// Starts `today` if the store still belongs to an earlier day. Returns
    /// whether the daily counters were dropped.
    pub async fn begin_day(&mut self, today: NaiveDate) -> Result<bool, ArcadeError> {
        if !self.roll_over(today) {
            return Ok(false);
        }
        self.flush().await?;
        Ok(true)
    }

    async fn flush(&self) -> Result<(), ArcadeError> {
        persist_data(&self.path, &self.data).await
    }

    fn migrate_brushing(&mut self) {
        if self.data.contains_key(keys::BRUSH_COUNT) {
            return;
        }
        let flag = |key: &str| self.get(key).is_some_and(|value| value == "true");
        let count = u32::from(flag(keys::BRUSH_MORNING)) + u32::from(flag(keys::BRUSH_NIGHT));
        let had_legacy = self.data.contains_key(keys::BRUSH_MORNING)
            || self.data.contains_key(keys::BRUSH_NIGHT);
        if had_legacy {
            info!(count, "migrated legacy brushing flags");
            self.data.insert(keys::BRUSH_COUNT.to_string(), count.to_string());
        }
        self.data.remove(keys::BRUSH_MORNING);
        self.data.remove(keys::BRUSH_NIGHT);
    }

    fn roll_over(&mut self, today: NaiveDate) -> bool {
        let today = today.to_string();
        if self.get(keys::LAST_ACTIVE_DAY) == Some(today.as_str()) {
            return false;
        }
        if self.data.contains_key(keys::LAST_ACTIVE_DAY) {
            info!(%today, "new day, daily counters start over");
        }
        for key in keys::DAILY {
            self.data.remove(key);
        }
        self.data.insert(keys::LAST_ACTIVE_DAY.to_string(), today);
        true
    }
}
