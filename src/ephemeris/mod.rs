pub mod bodies;
pub mod calculator;
pub mod kernels;
pub mod time;

pub use bodies::*;
pub use calculator::*;
pub use kernels::*;
pub use time::*;
