//! A pre-programmed flight routine for the Tello EDU drone.
//!
//! The [`tello-edu`](https://crates.io/crates/tello-edu) crate does all
//! the talking to the drone; this crate supplies a units-aware
//! [`Pilot`] on top of it and the [`fly`] routine the binary runs.

mod command;
mod drone;
mod errors;
mod flight;
mod pilot;
mod tello;
mod units;

pub use command::{FlipDirection, MoveDirection, TurnDirection};
pub use drone::Drone;
pub use errors::{FlightError, Result};
pub use flight::{fly, FlightReport};
pub use pilot::Pilot;
pub use tello::TelloDrone;
pub use units::Units;
