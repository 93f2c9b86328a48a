//! NAIF integer ID codes
//!
//! See: https://naif.jpl.nasa.gov/pub/naif/toolkit_docs/FORTRAN/req/naif_ids.html

use std::fmt;

pub type NaifId = i32;

pub const SOLAR_SYSTEM_BARYCENTER: NaifId = 0;
pub const EARTH_MOON_BARYCENTER: NaifId = 3;

pub const SUN: NaifId = 10;
pub const EARTH: NaifId = 399;
pub const MOON: NaifId = 301;
pub const ARTEMIS: NaifId = 23;

/// A body the service can query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    SolarSystemBarycenter,
    EarthMoonBarycenter,
    Sun,
    Earth,
    Moon,
    Spacecraft(NaifId),
}

impl Body {
    pub fn naif_id(&self) -> NaifId {
        match self {
            Body::SolarSystemBarycenter => SOLAR_SYSTEM_BARYCENTER,
            Body::EarthMoonBarycenter => EARTH_MOON_BARYCENTER,
            Body::Sun => SUN,
            Body::Earth => EARTH,
            Body::Moon => MOON,
            Body::Spacecraft(id) => *id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Body::SolarSystemBarycenter => "solar system barycenter",
            Body::EarthMoonBarycenter => "earth-moon barycenter",
            Body::Sun => "sun",
            Body::Earth => "earth",
            Body::Moon => "moon",
            Body::Spacecraft(_) => "spacecraft",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.naif_id())
    }
}
