//! Conway's Game of Life engine: a row-major generation buffer, the B3/S23
//! transition and a double-buffered simulation driver.

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod simulation;

pub use error::{GridError, GridResult};
pub use grid::{Cell, Grid};
pub use patterns::Pattern;
pub use simulation::{CycleDetector, Role, Simulation};
