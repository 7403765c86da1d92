/* 3rd party libraries */
use clap::{Arg, Command as ClapCommand};
use crossbeam_channel as cbc;
use log::info;
use std::thread::{sleep, Builder};
use std::time::Duration;

/* Custom libraries */
use coordinator::{Command, Controller, Dispatcher};
use shared::CarSnapshot;

/* Modules */
#[macro_use]
mod shared;
mod config;
mod coordinator;
mod elevator;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = ClapCommand::new("elevator-sim")
        .about("Discrete-tick elevator dispatch simulation")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("ticks")
                .long("ticks")
                .short('t')
                .takes_value(true)
                .help("Number of simulation steps, overrides the configuration"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print car snapshots as JSON lines"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path));
    let ticks = match matches.value_of("ticks") {
        Some(ticks) => unwrap_or_exit!(ticks.parse::<u32>()),
        None => config.simulation.ticks,
    };
    let json = matches.is_present("json");

    // Create the dispatcher
    let dispatcher = unwrap_or_exit!(Dispatcher::new(
        config.dispatcher.n_cars,
        config.dispatcher.n_floors
    ));
    info!(
        "Simulating {} cars over {} floors for {} ticks",
        dispatcher.cars().len(),
        dispatcher.n_floors(),
        ticks
    );

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let (snapshot_tx, snapshot_rx) = cbc::unbounded::<Vec<CarSnapshot>>();

    // Start the controller
    let controller = Controller::new(dispatcher, command_rx, snapshot_tx);
    let controller_thread = unwrap_or_exit!(Builder::new()
        .name("controller".into())
        .spawn(move || controller.run()));

    for request in config.simulation.pickup_requests() {
        unwrap_or_exit!(command_tx.send(Command::Request(request)));
    }

    // Drive the simulation clock
    let tick_interval = Duration::from_millis(config.simulation.tick_interval_ms);
    for tick in 1..=ticks {
        unwrap_or_exit!(command_tx.send(Command::Tick));
        let snapshot = unwrap_or_exit!(snapshot_rx.recv());
        print_snapshot(tick, &snapshot, json);

        if !tick_interval.is_zero() {
            sleep(tick_interval);
        }
    }

    unwrap_or_exit!(command_tx.send(Command::Terminate));
    match controller_thread.join() {
        Ok(dispatcher) => {
            if !dispatcher.deferred().is_empty() {
                info!("{} calls still waiting for a car", dispatcher.deferred().len());
            }
        }
        Err(_) => {
            log::error!("Controller thread panicked");
            std::process::exit(1);
        }
    }
}

fn print_snapshot(tick: u32, snapshot: &[CarSnapshot], json: bool) {
    if json {
        match serde_json::to_string(snapshot) {
            Ok(line) => println!("{{\"tick\":{},\"cars\":{}}}", tick, line),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
        return;
    }

    println!("--- tick {} ---", tick);
    for car in snapshot {
        println!("{}", car);
    }
}
