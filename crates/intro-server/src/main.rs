mod config;
mod wiring;

use std::error::Error;

use api::AppState;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ui::{Profile, ProfileError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = config::Config::from_env()?;
    init_tracing(&config.log_level);

    let profile = load_profile(&config)?;
    info!(
        listen_addr = %config.listen_addr,
        photo_path = %config.photo_path.display(),
        profile = %profile.name,
        max_sessions = config.max_sessions,
        "intro server configuration loaded"
    );

    let state = AppState::new(profile, config.max_sessions);
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, wiring::build_app(state, config.photo_path)).await?;
    Ok(())
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_profile(config: &config::Config) -> Result<Profile, ProfileError> {
    match &config.profile_path {
        Some(path) => Profile::from_json_file(path),
        None => Ok(Profile::default()),
    }
}
