use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Morning,
    Night,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Morning => f.write_str("morning"),
            Self::Night => f.write_str("night"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub session_token: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyTip {
    pub tip: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HydrationLogRequest {
    pub glasses: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrushingLogRequest {
    pub session_type: SessionType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BreathingLogRequest {
    pub duration_seconds: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TotalResponse {
    #[serde(default)]
    pub total_today: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HydrationStatus {
    pub glasses_today: u32,
    #[serde(default)]
    pub goal: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrushingStatus {
    pub brushing_today: u32,
    #[serde(default)]
    pub goal: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrushingDetailed {
    pub brushing_today: u32,
    #[serde(default)]
    pub morning_completed: bool,
    #[serde(default)]
    pub night_completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BreathingStatus {
    pub sessions_today: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PuzzleList {
    pub puzzles: Vec<Puzzle>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PuzzleSubmission {
    pub puzzle_id: String,
    pub user_sequence: Vec<u8>,
    pub correct: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PuzzleStatus {
    pub high_score_today: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmotionStatus {
    pub scenarios_today: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmotionScenario {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmotionLogRequest {
    pub scenario_id: String,
    pub selected_mood: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TipResponse {
    pub tip: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AffirmationStatus {
    pub affirmations_today: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AffirmationWords {
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AffirmationSubmission {
    pub words: Vec<String>,
    pub generated_affirmation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AffirmationHistory {
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedAffirmation {
    pub generated_affirmation: String,
}

#[derive(Debug, Deserialize)]
pub struct BrushRequest {
    pub session_type: SessionType,
}

#[derive(Debug, Deserialize)]
pub struct TileRequest {
    pub id: u8,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
}

#[derive(Debug, Deserialize)]
pub struct WordRequest {
    pub word: String,
}
