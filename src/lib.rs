//! Core library for a one-dimensional, three-state totalistic cellular automaton.

pub mod chart;
pub mod engine;
mod error;
pub mod rule;
mod status;
pub mod world;

pub use error::{Error, Result};
pub use rule::RuleTable;
pub use status::Status;
pub use world::{Cell, WORLD_SIZE, World};
