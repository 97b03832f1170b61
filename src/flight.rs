use log::{error, info};
use tokio::time::{sleep, Duration};

use crate::command::FlipDirection;
use crate::drone::Drone;
use crate::errors::Result;
use crate::pilot::Pilot;

/// Settling time between taking off and the first move.
const TAKEOFF_PAUSE: Duration = Duration::from_millis(500);

/// Battery readings taken before and after a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightReport {
    pub battery_before: u8,
    pub battery_after: u8,
}

impl FlightReport {
    /// Percentage points of battery the flight consumed.
    ///
    /// Signed - the two readings are independent telemetry samples
    /// and are not assumed to be monotonic.
    pub fn battery_used(&self) -> i16 {
        i16::from(self.battery_before) - i16::from(self.battery_after)
    }
}

/// Flies the routine: take off, climb a metre, flip forward and back,
/// turn a half circle, land.
///
/// Battery is read before and after flight. An error anywhere in the
/// airborne sequence is logged at this single boundary and otherwise
/// ignored; the drone is told to land regardless of how the sequence
/// ended.
pub async fn fly<D: Drone>(pilot: &mut Pilot<D>) -> Result<FlightReport> {
    let battery_before = pilot.battery().await?;
    info!("battery percentage: {battery_before}");

    if let Err(err) = routine(pilot).await {
        error!("{err}");
    }

    pilot.land().await?;

    let battery_after = pilot.battery().await?;
    info!("battery percentage: {battery_after}");

    Ok(FlightReport {
        battery_before,
        battery_after,
    })
}

async fn routine<D: Drone>(pilot: &mut Pilot<D>) -> Result<()> {
    pilot.take_off().await?;
    sleep(TAKEOFF_PAUSE).await;

    pilot.move_up(100.0).await?;
    pilot.flip(FlipDirection::Forward).await?;
    pilot.flip(FlipDirection::Back).await?;
    pilot.rotate_cw(180).await?;

    Ok(())
}
