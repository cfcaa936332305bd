//! API request handlers.

use crate::error::ApiError;
use crate::gex::GexProfile;
use crate::models::{
    DeleteSymbolResponse, GenerateLevelsRequest, HealthResponse, LevelsQuery, LevelsResponse,
    SummaryResponse, SymbolSnapshot, SymbolsListResponse, UpsertSymbolRequest,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use std::sync::Arc;
use tracing::info;


/// Maximum accepted symbol length.
const MAX_SYMBOL_LEN: usize = 32;

/// Checks that a symbol only holds characters a ticker can contain.
fn validate_symbol(symbol: &str) -> Result<(), ApiError> {
    let symbol = symbol.trim();
    if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
        return Err(ApiError::InvalidRequest(format!(
            "Symbol must be 1 to {} characters",
            MAX_SYMBOL_LEN
        )));
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '^'))
    {
        return Err(ApiError::InvalidRequest(format!(
            "Invalid symbol: {}. Use letters, digits, '.', '-', '_' or '^'",
            symbol
        )));
    }
    Ok(())
}

/// Looks up a stored symbol or fails with 404.
fn find_symbol(state: &AppState, symbol: &str) -> Result<SymbolSnapshot, ApiError> {
    state
        .get_symbol(symbol)
        .ok_or_else(|| ApiError::SymbolNotFound(AppState::normalize_symbol(symbol)))
}

/// Builds the profile for a stored symbol.
fn build_symbol_profile(
    state: &AppState,
    snapshot: &SymbolSnapshot,
    query: &LevelsQuery,
) -> Result<GexProfile, ApiError> {
    Ok(GexProfile::build(
        snapshot.reference_price,
        &snapshot.named_levels,
        query.apply(state.params()),
        state.fallback_reference_price(),
    )?)
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Ad-hoc Generation
// ============================================================================

/// Generate levels from explicit inputs.
#[utoipa::path(
    post,
    path = "/api/v1/gex/levels",
    request_body = GenerateLevelsRequest,
    responses(
        (status = 200, description = "Synthetic levels", body = LevelsResponse),
        (status = 400, description = "Invalid inputs", body = crate::error::ErrorResponse)
    ),
    tag = "Levels"
)]
pub async fn generate_levels(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateLevelsRequest>, JsonRejection>,
) -> Result<Json<LevelsResponse>, ApiError> {
    let Json(request) = payload?;
    let profile = GexProfile::build(
        request.reference_price,
        &request.named_levels,
        request.query().apply(state.params()),
        state.fallback_reference_price(),
    )?;

    Ok(Json(LevelsResponse {
        symbol: None,
        profile,
    }))
}

// ============================================================================
// Symbol Management
// ============================================================================

/// List registered symbols.
#[utoipa::path(
    get,
    path = "/api/v1/gex/symbols",
    responses(
        (status = 200, description = "Registered symbols", body = SymbolsListResponse)
    ),
    tag = "Symbols"
)]
pub async fn list_symbols(State(state): State<Arc<AppState>>) -> Json<SymbolsListResponse> {
    Json(SymbolsListResponse {
        symbols: state.list_symbols(),
    })
}

/// Get the stored anchors of a symbol.
#[utoipa::path(
    get,
    path = "/api/v1/gex/symbols/{symbol}",
    params(
        ("symbol" = String, Path, description = "Symbol")
    ),
    responses(
        (status = 200, description = "Stored anchors", body = SymbolSnapshot),
        (status = 404, description = "Symbol not found")
    ),
    tag = "Symbols"
)]
pub async fn get_symbol(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<SymbolSnapshot>, ApiError> {
    Ok(Json(find_symbol(&state, &symbol)?))
}

/// Create or replace the anchors of a symbol.
#[utoipa::path(
    put,
    path = "/api/v1/gex/symbols/{symbol}",
    params(
        ("symbol" = String, Path, description = "Symbol")
    ),
    request_body = UpsertSymbolRequest,
    responses(
        (status = 200, description = "Stored anchors", body = SymbolSnapshot),
        (status = 400, description = "Invalid symbol or body", body = crate::error::ErrorResponse)
    ),
    tag = "Symbols"
)]
pub async fn upsert_symbol(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    payload: Result<Json<UpsertSymbolRequest>, JsonRejection>,
) -> Result<Json<SymbolSnapshot>, ApiError> {
    let Json(request) = payload?;
    validate_symbol(&symbol)?;

    let snapshot = state.upsert_symbol(&symbol, request.reference_price, &request.named_levels);
    info!(
        "Updated symbol {} with {} anchors",
        snapshot.symbol,
        snapshot.named_levels.count()
    );

    Ok(Json(snapshot))
}

/// Delete a symbol.
#[utoipa::path(
    delete,
    path = "/api/v1/gex/symbols/{symbol}",
    params(
        ("symbol" = String, Path, description = "Symbol")
    ),
    responses(
        (status = 200, description = "Symbol deleted", body = DeleteSymbolResponse),
        (status = 404, description = "Symbol not found")
    ),
    tag = "Symbols"
)]
pub async fn delete_symbol(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<DeleteSymbolResponse>, ApiError> {
    let normalized = AppState::normalize_symbol(&symbol);
    if !state.remove_symbol(&normalized) {
        return Err(ApiError::SymbolNotFound(normalized));
    }
    info!("Deleted symbol {}", normalized);

    Ok(Json(DeleteSymbolResponse {
        success: true,
        message: format!("Symbol {} deleted", normalized),
    }))
}

// ============================================================================
// Symbol Levels
// ============================================================================

/// Generate levels from the stored anchors of a symbol.
#[utoipa::path(
    get,
    path = "/api/v1/gex/symbols/{symbol}/levels",
    params(
        ("symbol" = String, Path, description = "Symbol"),
        ("interval" = Option<f64>, Query, description = "Strike spacing (optional)"),
        ("span" = Option<f64>, Query, description = "Half-width of the ladder (optional)")
    ),
    responses(
        (status = 200, description = "Synthetic levels", body = LevelsResponse),
        (status = 400, description = "Invalid inputs", body = crate::error::ErrorResponse),
        (status = 404, description = "Symbol not found")
    ),
    tag = "Levels"
)]
pub async fn get_symbol_levels(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    query: Result<Query<LevelsQuery>, QueryRejection>,
) -> Result<Json<LevelsResponse>, ApiError> {
    let Query(query) = query?;
    let snapshot = find_symbol(&state, &symbol)?;
    let profile = build_symbol_profile(&state, &snapshot, &query)?;

    Ok(Json(LevelsResponse {
        symbol: Some(snapshot.symbol),
        profile,
    }))
}

/// Summarize the levels of a symbol.
#[utoipa::path(
    get,
    path = "/api/v1/gex/symbols/{symbol}/summary",
    params(
        ("symbol" = String, Path, description = "Symbol"),
        ("interval" = Option<f64>, Query, description = "Strike spacing (optional)"),
        ("span" = Option<f64>, Query, description = "Half-width of the ladder (optional)")
    ),
    responses(
        (status = 200, description = "Level summary", body = SummaryResponse),
        (status = 400, description = "Invalid inputs", body = crate::error::ErrorResponse),
        (status = 404, description = "Symbol not found")
    ),
    tag = "Levels"
)]
pub async fn get_symbol_summary(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    query: Result<Query<LevelsQuery>, QueryRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Query(query) = query?;
    let snapshot = find_symbol(&state, &symbol)?;
    let profile = build_symbol_profile(&state, &snapshot, &query)?;

    Ok(Json(SummaryResponse::new(
        snapshot.symbol,
        profile.summary(),
    )))
}
