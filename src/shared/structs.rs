/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

/// Direction a passenger wants to travel when calling from a hall.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Up,
    Down,
}

impl From<CallDirection> for Direction {
    fn from(item: CallDirection) -> Self {
        match item {
            CallDirection::Up => Direction::Up,
            CallDirection::Down => Direction::Down,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Moving,
    Stopped,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Idle => write!(f, "idle"),
        }
    }
}

impl fmt::Display for CallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Direction::from(*self), f)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Status::Moving => write!(f, "moving"),
            Status::Stopped => write!(f, "stopped"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupRequest {
    pub floor: i32,
    pub direction: CallDirection,
}

impl PickupRequest {
    pub fn new(floor: i32, direction: CallDirection) -> PickupRequest {
        PickupRequest { floor, direction }
    }
}

/// Read-only view of one car, taken after a tick.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CarSnapshot {
    pub id: usize,
    #[serde(rename = "currentFloor")]
    pub current_floor: i32,
    pub direction: Direction,
    pub status: Status,
    #[serde(rename = "pendingStops")]
    pub pending_stops: Vec<i32>,
}

impl fmt::Display for CarSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car {} at floor {}, direction: {}, status: {}, requests: {:?}",
            self.id, self.current_floor, self.direction, self.status, self.pending_stops
        )
    }
}
