use log::info;
use tokio::time::{sleep, Duration};

use crate::command::{FlipDirection, MoveDirection, TurnDirection};
use crate::drone::Drone;
use crate::errors::{FlightError, Result};
use crate::units::Units;

/// Pause between the commands making up a composite maneuver.
const MANEUVER_PAUSE: Duration = Duration::from_millis(100);

/// A units-aware flying surface over a [`Drone`].
///
/// Distances and speeds are given in the pilot's configured units and
/// converted to the whole-centimetre values the drone expects. Values
/// the drone would reject - moves outside 20 - 500 cm, rotations
/// outside 1 - 360 degrees, speeds outside 1 - 100 cm/s - are refused
/// here, before anything is sent.
pub struct Pilot<D> {
    drone: D,
    units: Units,
}

impl<D: Drone> Pilot<D> {
    /// A pilot working in centimetres.
    pub fn new(drone: D) -> Self {
        Self::with_units(drone, Units::Centimetres)
    }

    pub fn with_units(drone: D, units: Units) -> Self {
        Self { drone, units }
    }

    /// Gives the drone back.
    pub fn into_inner(self) -> D {
        self.drone
    }

    /// Percent battery remaining, 0 - 100.
    pub async fn battery(&mut self) -> Result<u8> {
        self.drone.battery().await
    }

    /// Seconds of motor use so far.
    pub async fn flight_time(&mut self) -> Result<u16> {
        self.drone.flight_time().await
    }

    pub async fn take_off(&mut self) -> Result<()> {
        info!("taking off");
        self.drone.take_off().await
    }

    pub async fn land(&mut self) -> Result<()> {
        info!("landing");
        self.drone.land().await
    }

    /// Moves in a direction for a distance in the configured units.
    pub async fn move_by(&mut self, direction: MoveDirection, distance: f64) -> Result<()> {
        let distance_cm = self.units.to_cm(distance);
        if !(20..=500).contains(&distance_cm) {
            return Err(FlightError::DistanceOutOfBounds { distance_cm });
        }

        info!("moving {}, {} cm", direction.as_str(), distance_cm);
        self.drone.move_by(direction, distance_cm as u32).await
    }

    pub async fn move_forward(&mut self, distance: f64) -> Result<()> {
        self.move_by(MoveDirection::Forward, distance).await
    }

    pub async fn move_back(&mut self, distance: f64) -> Result<()> {
        self.move_by(MoveDirection::Back, distance).await
    }

    pub async fn move_left(&mut self, distance: f64) -> Result<()> {
        self.move_by(MoveDirection::Left, distance).await
    }

    pub async fn move_right(&mut self, distance: f64) -> Result<()> {
        self.move_by(MoveDirection::Right, distance).await
    }

    pub async fn move_up(&mut self, distance: f64) -> Result<()> {
        self.move_by(MoveDirection::Up, distance).await
    }

    pub async fn move_down(&mut self, distance: f64) -> Result<()> {
        self.move_by(MoveDirection::Down, distance).await
    }

    /// Flips in a direction.
    pub async fn flip(&mut self, direction: FlipDirection) -> Result<()> {
        info!("flipping {}", direction.as_str());
        self.drone.flip(direction).await
    }

    /// Rotates in a direction by 1 - 360 degrees.
    pub async fn rotate(&mut self, direction: TurnDirection, degrees: u32) -> Result<()> {
        if !(1..=360).contains(&degrees) {
            return Err(FlightError::RotationOutOfBounds { degrees });
        }

        info!("rotating {} {} degrees", direction.as_str(), degrees);
        self.drone.turn(direction, degrees).await
    }

    pub async fn rotate_cw(&mut self, degrees: u32) -> Result<()> {
        self.rotate(TurnDirection::Clockwise, degrees).await
    }

    pub async fn rotate_ccw(&mut self, degrees: u32) -> Result<()> {
        self.rotate(TurnDirection::CounterClockwise, degrees).await
    }

    /// Sets the speed used for moves, in the configured units per
    /// second.
    pub async fn set_speed(&mut self, speed: f64) -> Result<()> {
        let cm_per_sec = self.units.to_cm(speed);
        if !(1..=100).contains(&cm_per_sec) {
            return Err(FlightError::SpeedOutOfBounds { cm_per_sec });
        }

        info!("setting speed to {} cm/s", cm_per_sec);
        self.drone.set_speed(cm_per_sec as u32).await
    }

    /// Spins through a number of full revolutions.
    pub async fn spin(&mut self, direction: TurnDirection, rotations: u32) -> Result<()> {
        info!("spinning {} {} times", direction.as_str(), rotations);
        for _ in 0..rotations {
            self.rotate(direction, 360).await?;
        }
        Ok(())
    }

    /// Flies the perimeter of a regular polygon, turning clockwise at
    /// each corner.
    ///
    /// Side lengths are restricted the same way moves are.
    pub async fn fly_poly(&mut self, sides: u32, side_length: f64) -> Result<()> {
        info!(
            "beginning polygon flight, {} sides of {} {} each",
            sides,
            side_length,
            self.units.as_str()
        );

        let corner_degrees = (360.0 / sides as f64).round() as u32;
        for _ in 0..sides {
            self.move_forward(side_length).await?;
            sleep(MANEUVER_PAUSE).await;
            self.rotate_cw(corner_degrees).await?;
            sleep(MANEUVER_PAUSE).await;
        }
        Ok(())
    }
}
