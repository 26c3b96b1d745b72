use pizza_intake::api::{self, AppState, RealtimeProxy};
use pizza_intake::config::Config;
use pizza_intake::lifecycle::{setup_tracing, OrderSystem};
use pizza_intake::model::Menu;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::from_env()?;
    let menu = Arc::new(Menu::load(config.menu_path.as_deref())?);
    info!(items = menu.items().len(), "Menu loaded");
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; /realtime/ephemeral will answer 500");
    }

    let system = OrderSystem::new(menu, config.scheduler.clone());
    let state = AppState::new(&system, RealtimeProxy::new(&config)?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Bye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
