mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState, util::clock::LocalClock,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let token_verifier = startup::setup_token_verifier(&config, &http_client).await?;

    let state = AppState::new(db, token_verifier, Arc::new(LocalClock));
    let app = router::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
