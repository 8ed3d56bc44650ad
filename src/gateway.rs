use crate::errors::ArcadeError;
use crate::models::{
    AffirmationHistory, AffirmationStatus, AffirmationSubmission, AffirmationWords, BreathingLogRequest,
    BreathingStatus, BrushingDetailed, BrushingLogRequest, BrushingStatus, DailyTip, EmotionLogRequest,
    EmotionScenario, EmotionStatus, ErrorBody, GeneratedAffirmation, HydrationLogRequest,
    HydrationStatus, LoginRequest, LoginResponse, LogoutRequest, MessageResponse, PuzzleList,
    PuzzleStatus, PuzzleSubmission, RegisterRequest, SessionType, TipResponse, TotalResponse,
    User,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{info, warn};

const PING_MESSAGE: &str = "API is working";

#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ArcadeError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn forget_token(&mut self) {
        self.token = None;
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<MessageResponse, ArcadeError> {
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/register/", &body).await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ArcadeError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("/api/login/", &body).await?;
        match response.session_token {
            Some(token) => {
                info!(username, "logged in");
                self.token = Some(token);
                Ok(())
            }
            None => Err(ArcadeError::Api {
                status: 200,
                detail: "login response carried no session token".to_string(),
            }),
        }
    }

    pub async fn logout(&mut self) -> Result<(), ArcadeError> {
        let Some(token) = self.token.clone() else {
            return Ok(());
        };
        let result: Result<MessageResponse, _> = self
            .post("/api/logout/", &LogoutRequest { session_token: token })
            .await;
        self.token = None;
        result.map(|_| ())
    }

    pub async fn current_user(&self) -> Result<User, ArcadeError> {
        if !self.is_authenticated() {
            return Err(ArcadeError::Unauthenticated);
        }
        self.get("/api/user/").await
    }

    pub async fn ping(&self) -> bool {
        match self.get::<MessageResponse>("/api/ping/").await {
            Ok(response) => response.message == PING_MESSAGE,
            Err(err) => {
                warn!("backend ping failed: {err}");
                false
            }
        }
    }

    pub async fn daily_tip(&self) -> Result<DailyTip, ArcadeError> {
        self.get("/api/tip/").await
    }

    pub async fn reset_all_stats(&self) -> Result<(), ArcadeError> {
        self.post_empty::<MessageResponse>("/api/stats/reset/")
            .await
            .map(|_| ())
    }

    pub async fn log_hydration(&self, glasses: u32) -> Result<TotalResponse, ArcadeError> {
        self.post("/api/hydration/log/", &HydrationLogRequest { glasses })
            .await
    }

    pub async fn hydration_status(&self) -> Result<HydrationStatus, ArcadeError> {
        self.get("/api/hydration/status/").await
    }

    pub async fn reset_hydration(&self) -> Result<(), ArcadeError> {
        self.post_empty::<MessageResponse>("/api/hydration/reset/")
            .await
            .map(|_| ())
    }

    pub async fn log_brushing(&self, session_type: SessionType) -> Result<TotalResponse, ArcadeError> {
        self.post("/api/brushing/log/", &BrushingLogRequest { session_type })
            .await
    }

    pub async fn brushing_status(&self) -> Result<BrushingStatus, ArcadeError> {
        self.get("/api/brushing/status/").await
    }

    pub async fn brushing_detailed(&self) -> Result<BrushingDetailed, ArcadeError> {
        self.get("/api/brushing/detailed/").await
    }

    pub async fn reset_brushing(&self) -> Result<(), ArcadeError> {
        self.post_empty::<MessageResponse>("/api/brushing/reset/")
            .await
            .map(|_| ())
    }

    pub async fn log_breathing(&self, duration_seconds: u32) -> Result<TotalResponse, ArcadeError> {
        self.post("/api/breathing/log/", &BreathingLogRequest { duration_seconds })
            .await
    }

    pub async fn breathing_status(&self) -> Result<BreathingStatus, ArcadeError> {
        self.get("/api/breathing/status/").await
    }

    pub async fn puzzles(&self) -> Result<PuzzleList, ArcadeError> {
        self.get("/api/puzzles/").await
    }

    pub async fn submit_puzzle(
        &self,
        puzzle_id: &str,
        user_sequence: &[u8],
        correct: bool,
    ) -> Result<(), ArcadeError> {
        let body = PuzzleSubmission {
            puzzle_id: puzzle_id.to_string(),
            user_sequence: user_sequence.to_vec(),
            correct,
        };
        self.post::<_, serde_json::Value>("/api/puzzles/submit/", &body)
            .await
            .map(|_| ())
    }

    pub async fn puzzle_status(&self) -> Result<PuzzleStatus, ArcadeError> {
        self.get("/api/puzzles/status/").await
    }

    pub async fn emotion_status(&self) -> Result<EmotionStatus, ArcadeError> {
        self.get("/api/emotions/status/").await
    }

    pub async fn emotion_scenario(&self) -> Result<EmotionScenario, ArcadeError> {
        self.get("/api/emotions/session/").await
    }

    pub async fn log_emotion(&self, scenario_id: &str, selected_mood: &str) -> Result<(), ArcadeError> {
        let body = EmotionLogRequest {
            scenario_id: scenario_id.to_string(),
            selected_mood: selected_mood.to_string(),
        };
        self.post::<_, MessageResponse>("/api/emotions/log/", &body)
            .await
            .map(|_| ())
    }

    pub async fn emotion_tip(&self, mood: &str) -> Result<TipResponse, ArcadeError> {
        let request = self
            .request(Method::GET, "/api/emotions/tip/")
            .query(&[("mood", mood)]);
        self.send(request).await
    }

    pub async fn affirmation_status(&self) -> Result<AffirmationStatus, ArcadeError> {
        self.get("/api/affirmations/status/").await
    }

    pub async fn affirmation_words(&self) -> Result<AffirmationWords, ArcadeError> {
        self.get("/api/affirmations/words/").await
    }

    pub async fn submit_affirmation(
        &self,
        words: &[&str],
        generated_affirmation: &str,
    ) -> Result<(), ArcadeError> {
        let body = AffirmationSubmission {
            words: words.iter().map(|word| word.to_string()).collect(),
            generated_affirmation: generated_affirmation.to_string(),
        };
        self.post::<_, MessageResponse>("/api/affirmations/submit/", &body)
            .await
            .map(|_| ())
    }

    pub async fn affirmation_history(&self) -> Result<AffirmationHistory, ArcadeError> {
        self.get("/api/affirmations/history/").await
    }

    pub async fn generate_affirmation(&self, words: &[&str]) -> Result<GeneratedAffirmation, ArcadeError> {
        let joined = words.join(",");
        let request = self
            .request(Method::GET, "/api/affirmations/generate/")
            .query(&[("words", joined.as_str())]);
        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, format!("{}{path}", self.base_url));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ArcadeError> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ArcadeError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ArcadeError> {
        self.send(self.request(Method::POST, path)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ArcadeError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.detail)
                .unwrap_or_else(|_| "API request failed".to_string());
            warn!(status = status.as_u16(), %detail, "backend rejected request");
            return Err(ArcadeError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_slice(&bytes).map_err(|err| ArcadeError::Api {
            status: status.as_u16(),
            detail: format!("malformed response: {err}"),
        })
    }
}
