//! HTTP request handlers

use crate::api::ServiceDescription;
use crate::error::{ApiError, ApiResult};
use crate::manifest;
use crate::metrics::LookupTimer;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use traktamente_core::{ListQuery, LookupError};
use tracing::debug;

/// Describe the service and its routes
pub async fn describe() -> Json<ServiceDescription> {
    Json(manifest::service_description())
}

/// List records, optionally filtered by `country` and `year`
///
/// The query string is taken as raw pairs so a repeated filter reaches the
/// directory as a miss instead of failing extraction.
pub async fn list_allowances(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Response> {
    let timer = LookupTimer::new("list");
    let query = ListQuery::from_pairs(pairs);
    let result = query
        .as_ref()
        .map_err(LookupError::clone)
        .and_then(|query| state.directory.list(query));
    let elapsed_ms = timer.finish(&result);

    match result {
        Ok(records) => {
            debug!(
                query = ?query,
                matched = records.len(),
                "Listed allowances ({:.3}ms)",
                elapsed_ms
            );
            Ok(Json(records).into_response())
        }
        Err(e) => {
            debug!(query = ?query, "List failed: {}", e);
            Err(e.into())
        }
    }
}

/// Look up the first record with the given code
pub async fn allowance_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Response> {
    let timer = LookupTimer::new("code");
    let result = state.directory.find_by_code(&code);
    let elapsed_ms = timer.finish(&result);

    let record = result.map_err(|e| {
        debug!(%code, "Code lookup failed: {}", e);
        ApiError::from(e)
    })?;
    debug!(%code, "Found allowance by code ({:.3}ms)", elapsed_ms);
    Ok(Json(record).into_response())
}

/// Look up the first record with the given country or territory name
pub async fn allowance_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> ApiResult<Response> {
    let timer = LookupTimer::new("country");
    let result = state.directory.find_by_country(&country);
    let elapsed_ms = timer.finish(&result);

    let record = result.map_err(|e| {
        debug!(%country, "Country lookup failed: {}", e);
        ApiError::from(e)
    })?;
    debug!(%country, "Found allowance by country ({:.3}ms)", elapsed_ms);
    Ok(Json(record).into_response())
}

/// `/traktamente/code/` with no code
pub async fn missing_code() -> ApiError {
    LookupError::MissingCode.into()
}

/// `/traktamente/country/` with no name
pub async fn missing_country() -> ApiError {
    LookupError::MissingCountry.into()
}

/// Prometheus metrics endpoint
pub async fn metrics() -> String {
    crate::metrics::get_prometheus_metrics()
}
