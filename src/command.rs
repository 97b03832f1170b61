/// Directions the drone can move in, by a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    /// The direction as the SDK spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveDirection::Forward => "forward",
            MoveDirection::Back => "back",
            MoveDirection::Left => "left",
            MoveDirection::Right => "right",
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
        }
    }
}

/// Directions the drone can flip in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Forward,
    Back,
    Left,
    Right,
}

impl FlipDirection {
    /// The direction letter as the SDK spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlipDirection::Forward => "f",
            FlipDirection::Back => "b",
            FlipDirection::Left => "l",
            FlipDirection::Right => "r",
        }
    }
}

/// Directions the drone can rotate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Clockwise,
    CounterClockwise,
}

impl TurnDirection {
    /// The direction as the SDK spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnDirection::Clockwise => "cw",
            TurnDirection::CounterClockwise => "ccw",
        }
    }
}
