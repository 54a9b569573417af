use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use platform_server::advisory::{
    AdvisoryMode, AdvisorySettings, LiveStatusAdvisor, ReqwestTransport,
};
use platform_server::directory::{FeedbackStore, SeedData, StationDirectory};
use platform_server::web::{AppState, create_router};

/// Address used when `PLATFORM_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("platform_server=info,tower_http=info")),
        )
        .init();

    // Live status configuration
    let settings = AdvisorySettings::from_env();
    let transport = ReqwestTransport::new().expect("Failed to create HTTP client");
    let advisor = LiveStatusAdvisor::new(settings, Arc::new(transport));
    match advisor.mode() {
        AdvisoryMode::Remote => info!("live status: remote model"),
        AdvisoryMode::Fallback => {
            warn!("OPENROUTER_API_KEY not set; live status uses the offline advisor")
        }
    }

    // Station directory
    let seed = match std::env::var("PLATFORM_SEED_FILE") {
        Ok(path) => {
            info!(%path, "loading seed file");
            SeedData::load(&path).expect("Failed to load seed file")
        }
        Err(_) => SeedData::builtin().expect("Built-in seed data is invalid"),
    };
    let directory = StationDirectory::from_seed(seed, &mut rand::thread_rng());
    info!("Loaded {} stations", directory.len().await);

    let state = AppState::new(directory, FeedbackStore::new(), advisor);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("PLATFORM_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("PLATFORM_ADDR must be a socket address");

    info!("Platform assistant listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                              - Health check");
    info!("  GET  /api/routes                          - Active lines");
    info!("  GET  /api/routes/:id/stations             - Stations on a line");
    info!("  GET  /api/stations/:id                    - Station details");
    info!("  GET  /api/stations/:id/recommendation     - Best coach for a class");
    info!("  POST /api/stations/:id/verify             - Confirm a recommendation");
    info!("  GET  /api/stations/:id/feedback           - Feedback summary");
    info!("  POST /api/stations/:id/feedback           - Leave feedback");
    info!("  GET  /api/stations/:id/live-status        - Live status for a station");
    info!("  POST /api/live-status                     - Live status by name");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
