/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::io;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::CallDirection;

/***************************************/
/*            Error types              */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("invalid configuration: {n_cars} cars, {n_floors} floors (both must be positive)")]
    InvalidConfiguration { n_cars: usize, n_floors: usize },
    #[error("no eligible car for {direction} call at floor {floor}")]
    NoEligibleCar { floor: i32, direction: CallDirection },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/***************************************/
/*             Unit tests              */
/***************************************/
