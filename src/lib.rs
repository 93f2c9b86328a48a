//! artemis-ephem - Artemis I position API
//!
//! Serves positions of the Orion spacecraft, the Moon and Earth relative to
//! the Earth-Moon barycenter, read from SPICE ephemeris kernels.

pub mod config;
pub mod ephemeris;
pub mod error;
pub mod models;
pub mod server;

pub use config::Config;
pub use server::{create_router, AppState};
