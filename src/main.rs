//! artemis-ephem HTTP server - Entry Point

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use artemis_ephem::ephemeris::{compute_orbits, AlmanacEphemeris, EphemerisSource};
use artemis_ephem::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting artemis-ephem server");

    let config = Config::from_env()?;
    tracing::debug!("Configuration: {:?}", config);

    let ephemeris = AlmanacEphemeris::load(&config.kernels)?;
    for kernel in ephemeris.kernels() {
        tracing::info!("Furnished {}", kernel.display());
    }
    let spacecraft = config.spacecraft();

    let coverage = ephemeris.coverage(spacecraft)?;
    tracing::info!(
        "Spacecraft {} coverage: {} to {} ({} hours)",
        spacecraft,
        coverage.start,
        coverage.end,
        coverage.duration().num_hours()
    );

    // Orbits are fixed for the life of the process
    let orbits = compute_orbits(&ephemeris, spacecraft, config.orbit_offset, config.orbit_step)?;
    tracing::info!("Precomputed {} orbit samples", orbits.len());

    let state = AppState::new(Arc::new(ephemeris), spacecraft, coverage, orbits);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    tracing::info!("Server shutting down");

    Ok(())
}
