#![warn(clippy::all)]

mod config;
mod driver;
mod error;
mod grid;
pub mod prompt;
pub mod seed;
pub mod terminal;
mod termination;
mod transition;
mod utils;

pub use config::{Config, InitMode, SpeedMode};
pub use driver::{Flow, Outcome, Pacer, Renderer, Simulation, State, TerminationReason};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use termination::{Fingerprint, History, Observation, TerminationDetector};
pub use transition::next_generation;
pub use utils::{parse_rle, NiceInt};
