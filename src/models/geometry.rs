use std::fmt;

use serde::{Deserialize, Serialize};

/// Kilometres to statute miles
pub const KM_TO_MI: f64 = 0.621371;

/// Speed of light in vacuum (km/s)
pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

/// Cartesian position in kilometres, serialized as `[x, y, z]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 3]", from = "[f64; 3]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_km(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    pub fn distance_mi(&self) -> f64 {
        self.distance_km() * KM_TO_MI
    }
}

impl From<Point> for [f64; 3] {
    fn from(p: Point) -> Self {
        [p.x, p.y, p.z]
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position (km): ({:17.5}, {:17.5}, {:17.5})",
            self.x, self.y, self.z
        )
    }
}

/// Cartesian velocity in km/s, serialized as `[vx, vy, vz]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 3]", from = "[f64; 3]")]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

impl Velocity {
    pub fn new(vx: f64, vy: f64, vz: f64) -> Self {
        Self { vx, vy, vz }
    }
}

impl From<Velocity> for [f64; 3] {
    fn from(v: Velocity) -> Self {
        [v.vx, v.vy, v.vz]
    }
}

impl From<[f64; 3]> for Velocity {
    fn from([vx, vy, vz]: [f64; 3]) -> Self {
        Self { vx, vy, vz }
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector (km/s): ({:17.5}, {:17.5}, {:17.5})",
            self.vx, self.vy, self.vz
        )
    }
}

/// Geometric state of a target relative to an observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoState {
    pub point: Point,
    pub velocity: Velocity,
    /// One-way light time (s)
    pub light_time: f64,
}

impl GeoState {
    /// Build a state from position and velocity, deriving the light time
    pub fn new(point: Point, velocity: Velocity) -> Self {
        let light_time = point.distance_km() / SPEED_OF_LIGHT_KM_S;
        Self {
            point,
            velocity,
            light_time,
        }
    }
}
