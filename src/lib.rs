//! # GEX Levels Backend - REST API Server
//!
//! A REST API backend that derives **synthetic** gamma exposure (GEX) strike
//! levels from a reference price and a handful of named price anchors. Built
//! with [Axum](https://crates.io/crates/axum) for async HTTP handling and
//! provides OpenAPI/Swagger documentation via [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Synthetic Data
//!
//! The magnitudes, call/put splits and integrity/hold statistics produced by
//! this service are shaped by a deterministic noise source keyed by strike.
//! They make a chart look populated when a real options chain is unavailable
//! and do **not** reflect open interest. Every response carries
//! `"synthetic": true` and a disclaimer.
//!
//! ## Key Features
//!
//! - **Deterministic**: identical inputs always produce identical ladders.
//!
//! - **Anchor Classification**: strikes near the call wall, put wall, gamma
//!   flip, high-volume level or max pain are tagged as walls, zero-gamma
//!   points or magnets, with a magnitude-based fallback.
//!
//! - **Symbol Registry**: anchors can be stored per symbol (seeded from a TOML
//!   config file) and queried repeatedly.
//!
//! - **OpenAPI Documentation**: Swagger UI at `/swagger-ui/`.
//!
//! - **Structured Logging**: request tracing with `tower-http`.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`gex`] | Level generation, classification and noise source |
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | TOML configuration |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/gex/levels` | Generate levels from explicit inputs |
//! | GET | `/api/v1/gex/symbols` | List symbols |
//! | GET | `/api/v1/gex/symbols/{symbol}` | Get stored anchors |
//! | PUT | `/api/v1/gex/symbols/{symbol}` | Create or replace anchors |
//! | DELETE | `/api/v1/gex/symbols/{symbol}` | Delete a symbol |
//! | GET | `/api/v1/gex/symbols/{symbol}/levels` | Levels from stored anchors |
//! | GET | `/api/v1/gex/symbols/{symbol}/summary` | Summary from stored anchors |
//!
//! ## Example Usage
//!
//! ```bash
//! # Development mode
//! cargo run
//!
//! # With a config file and custom port
//! GEX_CONFIG=config.toml PORT=3000 cargo run
//!
//! # Generate levels
//! curl -X POST http://localhost:8080/api/v1/gex/levels \
//!   -H "Content-Type: application/json" \
//!   -d '{"reference_price": 4600, "named_levels": {"gamma_flip": 4600, "call_wall": 4650}}'
//!
//! # Store anchors and read them back as levels
//! curl -X PUT http://localhost:8080/api/v1/gex/symbols/SPX \
//!   -H "Content-Type: application/json" \
//!   -d '{"reference_price": 4600, "named_levels": {"put_wall": 4550}}'
//! curl "http://localhost:8080/api/v1/gex/symbols/SPX/levels?interval=5&span=50"
//! ```
//!
//! ## Library Usage
//!
//! ```rust
//! use gex_levels_backend::gex::{generate_levels, Classification, GeneratorParams, NamedLevels};
//!
//! let named = NamedLevels {
//!     gamma_flip: Some(4600.0),
//!     call_wall: Some(4650.0),
//!     ..Default::default()
//! };
//! let levels = generate_levels(4600.0, &named, &GeneratorParams::default()).unwrap();
//! assert_eq!(levels.len(), 31);
//! assert_eq!(levels[10].strike, 4650.0);
//! assert_eq!(levels[10].classification, Classification::Wall);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod gex;
pub mod models;
pub mod state;
