//! HTTP API exposing the precomputed orbits and on-demand positions

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
