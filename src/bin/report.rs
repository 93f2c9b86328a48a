//! One-shot console report of where the spacecraft and the Moon are now,
//! as seen from Earth.

use anyhow::Result;
use chrono::Utc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use artemis_ephem::ephemeris::{AlmanacEphemeris, Body, EphemerisSource};
use artemis_ephem::Config;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let config = Config::from_env()?;
    let ephemeris = AlmanacEphemeris::load(&config.kernels)?;

    let now = Utc::now();
    println!("Current UTC time {}", now.to_rfc3339());

    for target in [config.spacecraft(), Body::Moon] {
        let state = ephemeris.geo_state(Body::Earth, target, now)?;
        println!("{}", target);
        println!("  {}", state.point);
        println!("  {}", state.velocity);
        println!("  Light time (s): {:18.13}", state.light_time);
        println!("  Distance (miles): {:.1}", state.point.distance_mi());
    }

    Ok(())
}
