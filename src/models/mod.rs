pub mod geometry;
pub mod positions;

pub use geometry::*;
pub use positions::*;
