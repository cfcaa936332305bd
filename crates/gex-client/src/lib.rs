//! HTTP client library for the GEX Levels API.
//!
//! This crate provides a typed HTTP client for interacting with the GEX
//! Levels backend. All level data returned by the API is synthetic and is
//! labelled as such in every response.
//!
//! # Example
//!
//! ```no_run
//! use gex_client::{ClientConfig, GenerateLevelsRequest, GexClient, NamedLevels};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gex_client::Error> {
//!     let client = GexClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let response = client
//!         .generate_levels(&GenerateLevelsRequest {
//!             reference_price: Some(4600.0),
//!             named_levels: NamedLevels {
//!                 call_wall: Some(4650.0),
//!                 ..Default::default()
//!             },
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("{} strikes", response.levels.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, GexClient};
pub use error::Error;
pub use types::*;
