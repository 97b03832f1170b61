use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlightError>;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("drone - {0}")]
    Drone(#[from] tello_edu::TelloError),

    #[error("incorrect units '{msg}', must be 'cm', 'in', 'm' or 'ft'")]
    IncorrectUnits { msg: String },

    #[error("requested distance is out of bounds 20 - 500 cm ({distance_cm} cm)")]
    DistanceOutOfBounds { distance_cm: i64 },

    #[error("requested rotation is out of bounds 1 - 360 degrees ({degrees} degrees)")]
    RotationOutOfBounds { degrees: u32 },

    #[error("requested speed is out of bounds 1 - 100 cm/s ({cm_per_sec} cm/s)")]
    SpeedOutOfBounds { cm_per_sec: i64 },

    #[error("command rejected - {msg}")]
    CommandRejected { msg: String },

    #[error("no state update from the drone")]
    NoStateUpdate,
}
