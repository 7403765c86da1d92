use crate::shared::{CarSnapshot, Direction, Status};
use log::debug;
use std::fmt;

/**
 * Simulates one elevator cab.
 *
 * A `Car` moves at most one floor per call to `advance()` towards the head of its stop list.
 * Stops are kept sorted in the direction of travel; while the car is idle they stay in the
 * order they were added, and the next `advance()` picks a direction from the first one.
 *
 * # Fields
 * - `id`:              Stable identifier, equal to the car's index in the dispatcher.
 * - `current_floor`:   Floor the car is at.
 * - `direction`:       Direction of travel, `Idle` when there is nothing to serve.
 * - `status`:          `Moving` while stops remain, `Stopped` otherwise.
 * - `pending_stops`:   Distinct floors the car has committed to visit.
 */
#[derive(Debug, Clone)]
pub struct Car {
    id: usize,
    current_floor: i32,
    direction: Direction,
    status: Status,
    pending_stops: Vec<i32>,
}

impl Car {
    pub fn new(id: usize) -> Car {
        Car {
            id,
            current_floor: 0,
            direction: Direction::Idle,
            status: Status::Stopped,
            pending_stops: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn pending_stops(&self) -> &[i32] {
        &self.pending_stops
    }

    pub fn enqueue(&mut self, floor: i32) {
        if !self.pending_stops.contains(&floor) {
            self.pending_stops.push(floor);
        }

        match self.direction {
            Direction::Up => self.pending_stops.sort_unstable(),
            Direction::Down => self.pending_stops.sort_unstable_by(|a, b| b.cmp(a)),
            Direction::Idle => (),
        }
    }

    /// Runs one tick: move a floor towards the next stop, then serve it if reached.
    pub fn advance(&mut self) {
        let target = match self.pending_stops.first() {
            Some(&floor) => floor,
            None => {
                self.direction = Direction::Idle;
                self.status = Status::Stopped;
                return;
            }
        };

        if self.current_floor < target {
            self.direction = Direction::Up;
            self.current_floor += 1;
        } else if self.current_floor > target {
            self.direction = Direction::Down;
            self.current_floor -= 1;
        }

        if self.current_floor == target {
            self.pending_stops.remove(0);
            debug!("Car {} arrived at floor {}", self.id, target);
        }

        if self.pending_stops.is_empty() {
            self.direction = Direction::Idle;
            self.status = Status::Stopped;
        } else {
            self.status = Status::Moving;
        }
    }

    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            id: self.id,
            current_floor: self.current_floor,
            direction: self.direction,
            status: self.status,
            pending_stops: self.pending_stops.clone(),
        }
    }

    /// Test helper for placing a car mid-journey.
    #[cfg(test)]
    pub fn test_set_state(&mut self, floor: i32, direction: Direction, stops: Vec<i32>) {
        self.current_floor = floor;
        self.direction = direction;
        self.status = if stops.is_empty() {
            Status::Stopped
        } else {
            Status::Moving
        };
        self.pending_stops = stops;
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
