/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Car;
use crate::shared::{CallDirection, CarSnapshot, DispatchError, Direction, PickupRequest};

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Assigned(usize),
    Deferred,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Routes hall calls to cars and drives the simulation clock.
 *
 * The dispatcher owns every car for the lifetime of a run. A call goes to the closest car that
 * is either idle or already heading the requested way without having passed the floor. Calls
 * that no car can take are kept in a backlog and retried at the start of the next `step()`.
 */
pub struct Dispatcher {
    cars: Vec<Car>,
    n_floors: usize,
    deferred: Vec<PickupRequest>,
}

impl Dispatcher {
    pub fn new(n_cars: usize, n_floors: usize) -> Result<Dispatcher, DispatchError> {
        if n_cars == 0 || n_floors == 0 {
            return Err(DispatchError::InvalidConfiguration { n_cars, n_floors });
        }

        // One freshly allocated car (and stop list) per id
        let cars = (0..n_cars).map(Car::new).collect::<Vec<Car>>();

        Ok(Dispatcher {
            cars,
            n_floors,
            deferred: Vec::new(),
        })
    }

    pub fn n_floors(&self) -> usize {
        self.n_floors
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Calls that are waiting for an eligible car, oldest first.
    pub fn deferred(&self) -> &[PickupRequest] {
        &self.deferred
    }

    pub fn request(&mut self, floor: i32, direction: CallDirection) -> Assignment {
        let request = PickupRequest::new(floor, direction);

        match self.try_assign(&request) {
            Ok(id) => Assignment::Assigned(id),
            Err(e) => {
                warn!("{}, deferring to next step", e);
                self.deferred.push(request);
                Assignment::Deferred
            }
        }
    }

    /// Assigns the call to the best candidate, or reports that none exists.
    pub fn try_assign(&mut self, request: &PickupRequest) -> Result<usize, DispatchError> {
        let id = self
            .select_car(request)
            .ok_or(DispatchError::NoEligibleCar {
                floor: request.floor,
                direction: request.direction,
            })?;

        self.cars[id].enqueue(request.floor);
        info!("Assigned car {} to floor {}", id, request.floor);
        Ok(id)
    }

    pub fn step(&mut self) {
        self.retry_deferred();

        for car in self.cars.iter_mut() {
            car.advance();
            debug!("{}", car);
        }
    }

    pub fn snapshot(&self) -> Vec<CarSnapshot> {
        self.cars.iter().map(Car::snapshot).collect()
    }

    fn retry_deferred(&mut self) {
        let backlog = std::mem::take(&mut self.deferred);

        for request in backlog {
            if self.try_assign(&request).is_err() {
                self.deferred.push(request);
            }
        }
    }

    // Closest candidate by absolute floor distance, first car wins ties
    fn select_car(&self, request: &PickupRequest) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;

        for car in self.cars.iter() {
            if !is_candidate(car, request) {
                continue;
            }

            let distance = car.current_floor().abs_diff(request.floor);
            match best {
                Some((_, best_distance)) if distance >= best_distance => (),
                _ => best = Some((car.id(), distance)),
            }
        }

        best.map(|(id, _)| id)
    }

    #[cfg(test)]
    pub fn test_get_car_mut(&mut self, id: usize) -> &mut Car {
        &mut self.cars[id]
    }
}

fn is_candidate(car: &Car, request: &PickupRequest) -> bool {
    match (car.direction(), request.direction) {
        (Direction::Idle, _) => true,
        (Direction::Up, CallDirection::Up) => car.current_floor() <= request.floor,
        (Direction::Down, CallDirection::Down) => car.current_floor() >= request.floor,
        _ => false,
    }
}
