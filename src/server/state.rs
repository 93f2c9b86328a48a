//! Shared application state

use std::sync::Arc;

use crate::ephemeris::{Body, EphemerisSource, TimeRange};
use crate::models::Orbits;

/// State passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn EphemerisSource>,
    pub spacecraft: Body,
    /// Spacecraft coverage, fixed at startup
    pub coverage: TimeRange,
    /// Orbit tracks precomputed at startup
    pub orbits: Arc<Orbits>,
}

impl AppState {
    pub fn new(
        source: Arc<dyn EphemerisSource>,
        spacecraft: Body,
        coverage: TimeRange,
        orbits: Orbits,
    ) -> Self {
        Self {
            source,
            spacecraft,
            coverage,
            orbits: Arc::new(orbits),
        }
    }
}
