//! Tile-based digital circuit simulation.
//!
//! A [`Grid`] holds one optional [`Element`] per cell. [`Grid::update`] advances
//! all signals by one synchronous tick; wires that touch each other form a net
//! that carries a signal across its whole length within that tick.

pub mod board;
pub mod circuits;
pub mod config;
pub mod direction;
pub mod error;
pub mod io;
pub mod simulation;

pub use board::{Grid, Tool, ToolOutcome};
pub use circuits::{Element, ElementKind, GateKind};
pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use io::{CellDescriptor, Snapshot};
pub use simulation::Simulation;
