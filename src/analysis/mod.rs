pub mod report;
pub use report::*;

pub mod simulation;
pub use simulation::*;

pub mod strategy;
pub use strategy::*;
