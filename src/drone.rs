use async_trait::async_trait;

use crate::command::{FlipDirection, MoveDirection, TurnDirection};
use crate::errors::Result;

/// What the flight routine needs a drone to be able to do.
///
/// [`TelloDrone`](crate::TelloDrone) implements this over a real
/// connection; tests implement it with a mock that records the
/// command stream.
#[async_trait]
pub trait Drone {
    /// Percent battery remaining, 0 - 100.
    async fn battery(&mut self) -> Result<u8>;

    /// Seconds of motor use so far.
    async fn flight_time(&mut self) -> Result<u16>;

    async fn take_off(&mut self) -> Result<()>;

    async fn land(&mut self) -> Result<()>;

    /// Moves in a direction for a distance in centimetres.
    async fn move_by(&mut self, direction: MoveDirection, distance_cm: u32) -> Result<()>;

    /// Flips in a direction.
    async fn flip(&mut self, direction: FlipDirection) -> Result<()>;

    /// Rotates in a direction by an angle in degrees.
    async fn turn(&mut self, direction: TurnDirection, degrees: u32) -> Result<()>;

    /// Sets the speed used for moves, in centimetres per second.
    async fn set_speed(&mut self, cm_per_sec: u32) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::VecDeque;

    use async_trait::async_trait;

    use super::Drone;
    use crate::command::{FlipDirection, MoveDirection, TurnDirection};
    use crate::errors::{FlightError, Result};

    /// Records the command stream for test verification.
    pub(crate) struct MockDrone {
        pub sent: Vec<String>,
        pub battery_levels: VecDeque<u8>,
        pub fail_on: Option<&'static str>,
        pub motor_time: u16,
    }

    impl MockDrone {
        pub fn new(battery_levels: &[u8]) -> Self {
            Self {
                sent: vec![],
                battery_levels: battery_levels.iter().copied().collect(),
                fail_on: None,
                motor_time: 0,
            }
        }

        /// A drone that rejects one particular command.
        pub fn failing_on(battery_levels: &[u8], command: &'static str) -> Self {
            let mut drone = Self::new(battery_levels);
            drone.fail_on = Some(command);
            drone
        }

        fn send(&mut self, command: String) -> Result<()> {
            if self.fail_on == Some(command.as_str()) {
                return Err(FlightError::CommandRejected { msg: command });
            }
            self.sent.push(command);
            Ok(())
        }
    }

    #[async_trait]
    impl Drone for MockDrone {
        async fn battery(&mut self) -> Result<u8> {
            self.sent.push("battery?".to_string());
            self.battery_levels
                .pop_front()
                .ok_or(FlightError::NoStateUpdate)
        }

        async fn flight_time(&mut self) -> Result<u16> {
            self.sent.push("time?".to_string());
            Ok(self.motor_time)
        }

        async fn take_off(&mut self) -> Result<()> {
            self.send("takeoff".to_string())
        }

        async fn land(&mut self) -> Result<()> {
            self.send("land".to_string())
        }

        async fn move_by(&mut self, direction: MoveDirection, distance_cm: u32) -> Result<()> {
            self.send(format!("{} {distance_cm}", direction.as_str()))
        }

        async fn flip(&mut self, direction: FlipDirection) -> Result<()> {
            self.send(format!("flip {}", direction.as_str()))
        }

        async fn turn(&mut self, direction: TurnDirection, degrees: u32) -> Result<()> {
            self.send(format!("{} {degrees}", direction.as_str()))
        }

        async fn set_speed(&mut self, cm_per_sec: u32) -> Result<()> {
            self.send(format!("speed {cm_per_sec}"))
        }
    }
}
