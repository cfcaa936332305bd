//! GEX Levels Backend Server
//!
//! REST API server exposing synthetic gamma exposure strike levels.

use gex_levels_backend::api::create_router;
use gex_levels_backend::config::Config;
use gex_levels_backend::state::AppState;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gex_levels_backend::error::ErrorResponse;
use gex_levels_backend::gex::{
    Classification, GammaRegime, GeneratorParams, GexProfile, GexSummary, NamedLevels, Role,
    StrikeLevel, WallLevel,
};
use gex_levels_backend::models::{
    DeleteSymbolResponse, GenerateLevelsRequest, HealthResponse, LevelsQuery, LevelsResponse,
    SummaryResponse, SymbolSnapshot, SymbolsListResponse, UpsertSymbolRequest,
};

/// Default configuration file path.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        gex_levels_backend::api::handlers::health_check,
        gex_levels_backend::api::handlers::generate_levels,
        gex_levels_backend::api::handlers::list_symbols,
        gex_levels_backend::api::handlers::get_symbol,
        gex_levels_backend::api::handlers::upsert_symbol,
        gex_levels_backend::api::handlers::delete_symbol,
        gex_levels_backend::api::handlers::get_symbol_levels,
        gex_levels_backend::api::handlers::get_symbol_summary,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            GenerateLevelsRequest,
            LevelsQuery,
            LevelsResponse,
            SummaryResponse,
            UpsertSymbolRequest,
            SymbolSnapshot,
            SymbolsListResponse,
            DeleteSymbolResponse,
            GexProfile,
            GexSummary,
            WallLevel,
            GammaRegime,
            StrikeLevel,
            NamedLevels,
            GeneratorParams,
            Classification,
            Role,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Levels", description = "Synthetic GEX level generation"),
        (name = "Symbols", description = "Stored anchors per symbol"),
    ),
    info(
        title = "GEX Levels API",
        version = "0.1.0",
        description = "REST API serving synthetic gamma exposure strike levels. \
                       Values are display-only and do not reflect real open interest.",
        license(name = "MIT"),
        contact(name = "Joaquin Bejar", email = "jb@taunais.com")
    )
)]
struct ApiDoc;

/// Loads the configuration file, falling back to defaults when it is absent.
fn load_config() -> anyhow::Result<Config> {
    let path = std::env::var("GEX_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if Path::new(&path).exists() {
        let config = Config::load(&path)?;
        info!("Loaded configuration from {}", path);
        Ok(config)
    } else {
        warn!("Config file {} not found, using defaults", path);
        Ok(Config::default())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = load_config()?;

    // Environment overrides the config file
    if let Ok(host) = std::env::var("HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid number: {}", e))?;
    }

    let host = config.server.host.clone();
    let port = config.server.port;

    // Create application state
    let state = Arc::new(AppState::from_config(config));

    info!("Starting GEX Levels Backend on {}:{}", host, port);
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        host, port
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
