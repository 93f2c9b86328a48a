//! HTTP handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::state::AppState;
use crate::ephemeris::{snapshot, NaifId};
use crate::error::EphemerisError;
use crate::models::{Orbits, Positions};

pub type HandlerResult<T> = Result<Json<T>, AppError>;

#[derive(Debug, Clone, Deserialize)]
pub struct PositionsQuery {
    /// RFC 3339 instant; the current time when absent
    pub at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageResponse {
    pub spacecraft_id: NaifId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub orbit_samples: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        orbit_samples: state.orbits.len(),
    })
}

/// GET /api/v1/orbits
///
/// Spacecraft and Moon tracks precomputed at startup.
pub async fn get_orbits(State(state): State<AppState>) -> Json<Arc<Orbits>> {
    Json(Arc::clone(&state.orbits))
}

/// GET /api/v1/positions
///
/// Spacecraft, Moon and Earth relative to the Earth-Moon barycenter, now or
/// at `?at=`.
pub async fn get_positions(
    State(state): State<AppState>,
    Query(query): Query<PositionsQuery>,
) -> HandlerResult<Positions> {
    let at = match query.at {
        Some(raw) => DateTime::parse_from_rfc3339(&raw)
            .map_err(|e| AppError::BadRequest(format!("Invalid time {:?}: {}", raw, e)))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    if !state.coverage.contains(at) {
        return Err(EphemerisError::OutOfCoverage {
            at,
            start: state.coverage.start,
            end: state.coverage.end,
        }
        .into());
    }

    let positions = snapshot(state.source.as_ref(), state.spacecraft, at)?;
    Ok(Json(positions))
}

/// GET /api/v1/coverage
pub async fn get_coverage(State(state): State<AppState>) -> Json<CoverageResponse> {
    Json(CoverageResponse {
        spacecraft_id: state.spacecraft.naif_id(),
        start: state.coverage.start,
        end: state.coverage.end,
    })
}
