use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use wellness_arcade::{
    games::Backing, gateway::Gateway, storage::keys, storage::LocalStore, AppState, Arcade,
    Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let store = LocalStore::open(&config.data_path).await;

    let backing = match &config.api_url {
        Some(api_url) => {
            let token = store.get(keys::SESSION_TOKEN).map(str::to_string);
            let gateway = Gateway::new(api_url, config.http_timeout)?.with_token(token);
            if gateway.ping().await {
                info!(%api_url, "backend reachable");
            } else {
                warn!(%api_url, "backend not answering yet, continuing");
            }
            Backing::remote(gateway, store)
        }
        None => {
            info!(path = %config.data_path.display(), "no backend configured, running standalone");
            Backing::standalone(store)
        }
    };

    let mut arcade = Arcade::new(backing);
    arcade.restore_session().await;

    let state = AppState::new(arcade);
    let shared = Arc::clone(&state.arcade);
    let app = wellness_arcade::router(state);

    let addr = config.addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!("cannot listen for shutdown signal: {err}");
                std::future::pending::<()>().await;
            }
            info!("shutting down");
            shared.lock().await.timers_mut().cancel_all();
        })
        .await?;

    Ok(())
}
