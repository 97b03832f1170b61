use async_trait::async_trait;
use tello_edu::{Connected, Tello, TelloOptions, TelloState};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{timeout, Duration};

use crate::command::{FlipDirection, MoveDirection, TurnDirection};
use crate::drone::Drone;
use crate::errors::{FlightError, Result};

const STATE_UPDATE_TIMEOUT: Duration = Duration::from_secs(5);

/// A connection to a real Tello EDU drone.
///
/// Commands go through the `tello-edu` crate; battery level and flight
/// time are read from the state updates the drone broadcasts while
/// connected.
pub struct TelloDrone {
    drone: Tello<Connected>,
    state_updates: UnboundedReceiver<TelloState>,
}

impl TelloDrone {
    /// Waits until the drone's own WiFi network is joined, then
    /// connects and puts the drone in command mode.
    pub async fn connect() -> Result<Self> {
        let mut options = TelloOptions::default();
        let state_updates = options.with_state();

        let drone = Tello::new().wait_for_wifi().await?;
        let drone = drone.connect_with(options).await?;

        Ok(Self {
            drone,
            state_updates,
        })
    }

    /// The freshest state update, draining any backlog first.
    async fn state(&mut self) -> Result<TelloState> {
        let mut latest = None;
        while let Ok(state) = self.state_updates.try_recv() {
            latest = Some(state);
        }
        if let Some(state) = latest {
            return Ok(state);
        }

        match timeout(STATE_UPDATE_TIMEOUT, self.state_updates.recv()).await {
            Ok(Some(state)) => Ok(state),
            _ => Err(FlightError::NoStateUpdate),
        }
    }
}

#[async_trait]
impl Drone for TelloDrone {
    async fn battery(&mut self) -> Result<u8> {
        Ok(self.state().await?.battery)
    }

    async fn flight_time(&mut self) -> Result<u16> {
        Ok(self.state().await?.motor_time)
    }

    async fn take_off(&mut self) -> Result<()> {
        self.drone.take_off().await?;
        Ok(())
    }

    async fn land(&mut self) -> Result<()> {
        self.drone.land().await?;
        Ok(())
    }

    async fn move_by(&mut self, direction: MoveDirection, distance_cm: u32) -> Result<()> {
        match direction {
            MoveDirection::Forward => {
                self.drone.move_forward(distance_cm as _).await?;
            }
            MoveDirection::Back => {
                self.drone.move_back(distance_cm as _).await?;
            }
            MoveDirection::Left => {
                self.drone.move_left(distance_cm as _).await?;
            }
            MoveDirection::Right => {
                self.drone.move_right(distance_cm as _).await?;
            }
            MoveDirection::Up => {
                self.drone.move_up(distance_cm as _).await?;
            }
            MoveDirection::Down => {
                self.drone.move_down(distance_cm as _).await?;
            }
        }
        Ok(())
    }

    async fn flip(&mut self, direction: FlipDirection) -> Result<()> {
        match direction {
            FlipDirection::Forward => {
                self.drone.flip_forward().await?;
            }
            FlipDirection::Back => {
                self.drone.flip_back().await?;
            }
            FlipDirection::Left => {
                self.drone.flip_left().await?;
            }
            FlipDirection::Right => {
                self.drone.flip_right().await?;
            }
        }
        Ok(())
    }

    async fn turn(&mut self, direction: TurnDirection, degrees: u32) -> Result<()> {
        match direction {
            TurnDirection::Clockwise => {
                self.drone.turn_clockwise(degrees as _).await?;
            }
            TurnDirection::CounterClockwise => {
                self.drone.turn_counterclockwise(degrees as _).await?;
            }
        }
        Ok(())
    }

    async fn set_speed(&mut self, cm_per_sec: u32) -> Result<()> {
        self.drone.set_speed(cm_per_sec as _).await?;
        Ok(())
    }
}
