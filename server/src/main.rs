//! Folio Server - backend for the portfolio site.
//!
//! Serves the portfolio content, computes carousel frames with folio-engine,
//! and forwards contact form submissions to the configured delivery backend.

mod config;
mod content;
mod delivery;
mod error;
mod handlers;
mod routes;

use crate::config::Config;
use crate::delivery::Delivery;
use folio_engine::Portfolio;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub portfolio: Arc<Portfolio>,
    pub delivery: Arc<Delivery>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Folio Server on {}:{}", config.host, config.port);

    // Load content
    let portfolio = content::load_portfolio(&config.portfolio_path).await?;
    tracing::info!(
        projects = portfolio.projects.len(),
        skill_categories = portfolio.skills.len(),
        "Loaded portfolio from {}",
        config.portfolio_path.display()
    );

    let delivery = Delivery::from_config(&config.delivery)?;
    tracing::info!("Contact delivery: {}", delivery.name());

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving static files from {}", dir.display());
    }

    // Build application state
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState {
        config: Arc::new(config),
        portfolio: Arc::new(portfolio),
        delivery: Arc::new(delivery),
    };

    let app = routes::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
