use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Point;

/// Spacecraft and Moon tracks sampled across the spacecraft's coverage
#[derive(Debug, Clone, Default, Serialize)]
pub struct Orbits {
    pub artemis: Vec<Point>,
    pub moon: Vec<Point>,
    /// Sample instants shared by both tracks
    pub times: Vec<DateTime<Utc>>,
}

impl Orbits {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Positions relative to the Earth-Moon barycenter at one instant
#[derive(Debug, Clone, Serialize)]
pub struct Positions {
    pub artemis: Point,
    pub earth: Point,
    pub moon: Point,
    pub timestamp: DateTime<Utc>,
}
