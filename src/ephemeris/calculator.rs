//! Ephemeris state queries
//!
//! All geometry is delegated to the toolkit almanac; this module only turns
//! wall-clock times into epochs, asks for single geometric states and
//! collects the answers.

use std::path::PathBuf;

use anise::constants::orientations::J2000;
use anise::prelude::{Almanac, Frame};
use chrono::{DateTime, Duration, Utc};

use super::bodies::Body;
use super::kernels::{load_kernels, LoadedKernels};
use super::time::{from_epoch, sample_times, to_epoch, TimeRange};
use crate::error::EphemerisError;
use crate::models::{GeoState, Orbits, Point, Positions, Velocity};

/// Source of geometric states
pub trait EphemerisSource: Send + Sync {
    /// Geometric state of `target` relative to `observer` in J2000
    fn geo_state(
        &self,
        observer: Body,
        target: Body,
        at: DateTime<Utc>,
    ) -> Result<GeoState, EphemerisError>;

    /// Usable time range of a body's ephemeris
    fn coverage(&self, body: Body) -> Result<TimeRange, EphemerisError>;
}

/// Toolkit-backed ephemeris
pub struct AlmanacEphemeris {
    almanac: Almanac,
    kernels: Vec<PathBuf>,
}

impl AlmanacEphemeris {
    /// Furnish the given kernels and wrap the resulting almanac
    pub fn load<P: AsRef<std::path::Path>>(paths: &[P]) -> Result<Self, EphemerisError> {
        let LoadedKernels {
            almanac, loaded, ..
        } = load_kernels(paths)?;

        Ok(Self {
            almanac,
            kernels: loaded,
        })
    }

    /// Kernels that were furnished into the almanac
    pub fn kernels(&self) -> &[PathBuf] {
        &self.kernels
    }

    fn frame(body: Body) -> Frame {
        Frame::new(body.naif_id(), J2000)
    }
}

impl EphemerisSource for AlmanacEphemeris {
    fn geo_state(
        &self,
        observer: Body,
        target: Body,
        at: DateTime<Utc>,
    ) -> Result<GeoState, EphemerisError> {
        tracing::debug!("Computing geometry from {} to {} at {}", observer, target, at);

        let state = self
            .almanac
            .translate(Self::frame(target), Self::frame(observer), to_epoch(at), None)
            .map_err(|e| EphemerisError::Query {
                observer,
                target,
                at,
                message: e.to_string(),
            })?;

        let point = Point::new(state.radius_km.x, state.radius_km.y, state.radius_km.z);
        let velocity = Velocity::new(
            state.velocity_km_s.x,
            state.velocity_km_s.y,
            state.velocity_km_s.z,
        );
        let geo = GeoState::new(point, velocity);

        tracing::debug!("{}", geo.point);
        tracing::debug!("{}", geo.velocity);
        tracing::debug!("Light time (s): {:18.13}", geo.light_time);

        Ok(geo)
    }

    fn coverage(&self, body: Body) -> Result<TimeRange, EphemerisError> {
        let (start, end) =
            self.almanac
                .spk_domain(body.naif_id())
                .map_err(|e| EphemerisError::Coverage {
                    body,
                    message: e.to_string(),
                })?;

        Ok(TimeRange::new(from_epoch(start)?, from_epoch(end)?))
    }
}

/// Positions of `target` relative to `observer` at each instant
pub fn track(
    source: &dyn EphemerisSource,
    observer: Body,
    target: Body,
    times: &[DateTime<Utc>],
) -> Result<Vec<Point>, EphemerisError> {
    times
        .iter()
        .map(|at| source.geo_state(observer, target, *at).map(|s| s.point))
        .collect()
}

/// Sample the spacecraft and Moon across the spacecraft's coverage,
/// relative to the Earth-Moon barycenter
pub fn compute_orbits(
    source: &dyn EphemerisSource,
    spacecraft: Body,
    offset: Duration,
    step: Duration,
) -> Result<Orbits, EphemerisError> {
    let range = source.coverage(spacecraft)?;
    let times = sample_times(&range, offset, step);

    tracing::info!(
        "Sampling {} orbit points between {} and {}",
        times.len(),
        range.start,
        range.end
    );

    let artemis = track(source, Body::EarthMoonBarycenter, spacecraft, &times)?;
    let moon = track(source, Body::EarthMoonBarycenter, Body::Moon, &times)?;

    Ok(Orbits {
        artemis,
        moon,
        times,
    })
}

/// Spacecraft, Moon and Earth relative to the Earth-Moon barycenter
pub fn snapshot(
    source: &dyn EphemerisSource,
    spacecraft: Body,
    at: DateTime<Utc>,
) -> Result<Positions, EphemerisError> {
    let origin = Body::EarthMoonBarycenter;

    Ok(Positions {
        artemis: source.geo_state(origin, spacecraft, at)?.point,
        moon: source.geo_state(origin, Body::Moon, at)?.point,
        earth: source.geo_state(origin, Body::Earth, at)?.point,
        timestamp: at,
    })
}


#[cfg(test)]
mod tests {
    use super::testing::FakeEphemeris;
    use super::*;
    use crate::ephemeris::bodies::ARTEMIS;

    #[test]
    fn test_compute_orbits_hourly() {
        let source = FakeEphemeris::new();
        let orbits = compute_orbits(
            &source,
            Body::Spacecraft(ARTEMIS),
            Duration::seconds(1),
            Duration::hours(1),
        )
        .unwrap();

        assert_eq!(orbits.len(), 4);
        assert_eq!(orbits.artemis.len(), 4);
        assert_eq!(orbits.moon.len(), 4);
        assert_eq!(orbits.times[0], source.range.start + Duration::seconds(1));

        // Relative to the barycenter (id 3), spacecraft id 23
        let first = orbits.artemis[0].x;
        assert!((first - 20.0 * (1.0 + 1.0 / 3600.0)).abs() < 1e-9);
    }

    #[test]
    fn test_compute_orbits_requires_coverage() {
        let source = FakeEphemeris::new();
        let result = compute_orbits(&source, Body::Moon, Duration::seconds(1), Duration::hours(1));
        assert!(matches!(result, Err(EphemerisError::Coverage { .. })));
    }

    #[test]
    fn test_snapshot() {
        let source = FakeEphemeris::new();
        let at = source.range.start;
        let positions = snapshot(&source, Body::Spacecraft(ARTEMIS), at).unwrap();

        assert_eq!(positions.timestamp, at);
        assert_eq!(positions.artemis, Point::new(20.0, 0.0, 0.0));
        assert_eq!(positions.moon, Point::new(298.0, 0.0, 0.0));
        assert_eq!(positions.earth, Point::new(396.0, 0.0, 0.0));
    }

    #[test]
    fn test_track_propagates_errors() {
        let source = FakeEphemeris::new();
        let times = [source.range.start];
        let result = track(&source, Body::Earth, Body::Sun, &times);
        assert!(matches!(result, Err(EphemerisError::Query { .. })));
    }
}
