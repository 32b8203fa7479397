//! Traktamente HTTP Server - read-only API over Swedish foreign allowance rates
//!
//! This crate serves the allowance directory over HTTP: a self-description at
//! `/`, filtered listing at `/traktamente`, and single-record lookups by code
//! and by country or territory name.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod manifest;
pub mod metrics;
pub mod routes;
pub mod state;

pub use api::{EndpointInfo, ServiceDescription};
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use state::AppState;
