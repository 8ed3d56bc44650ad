pub mod app;
pub mod arcade;
pub mod config;
pub mod errors;
pub mod games;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod timers;
pub mod ui;
pub mod view;

pub use app::router;
pub use arcade::Arcade;
pub use config::Config;
pub use errors::ArcadeError;
pub use state::AppState;
