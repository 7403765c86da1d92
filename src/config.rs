/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{CallDirection, ConfigError, PickupRequest};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub dispatcher: DispatcherConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DispatcherConfig {
    pub n_cars: usize,
    pub n_floors: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SimulationConfig {
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    #[serde(default)]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub requests: Vec<RequestConfig>,
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct RequestConfig {
    pub floor: i32,
    pub direction: CallDirection,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            ticks: default_ticks(),
            tick_interval_ms: 0,
            requests: Vec::new(),
        }
    }
}

impl From<RequestConfig> for PickupRequest {
    fn from(item: RequestConfig) -> Self {
        PickupRequest::new(item.floor, item.direction)
    }
}

fn default_ticks() -> u32 {
    10
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

impl SimulationConfig {
    /// Requests to feed the dispatcher. Falls back to the classic three-call demo.
    pub fn pickup_requests(&self) -> Vec<PickupRequest> {
        if self.requests.is_empty() {
            return vec![
                PickupRequest::new(3, CallDirection::Up),
                PickupRequest::new(5, CallDirection::Up),
                PickupRequest::new(7, CallDirection::Down),
            ];
        }
        self.requests.iter().map(|r| PickupRequest::from(*r)).collect()
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
