/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::{Assignment, Dispatcher};
use crate::shared::{CarSnapshot, PickupRequest};

/***************************************/
/*               Enums                 */
/***************************************/

/// Messages accepted by the controller, handled strictly in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Request(PickupRequest),
    Tick,
    Terminate,
}

enum Event {
    RequestReceived(PickupRequest),
    Tick,
    Terminate,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Serialises access to a `Dispatcher` from any number of threads.
 *
 * The controller owns the dispatcher and is the only thread touching it, so a pickup request
 * (candidate scan + enqueue) can never interleave with another request or with a tick. All
 * commands share one channel, which keeps a request sent before a tick ahead of that tick.
 *
 * # Fields
 * - `command_rx`:      Receives pickup requests, ticks and the terminate signal.
 * - `snapshot_tx`:     Publishes the state of every car after each tick.
 */
pub struct Controller {
    dispatcher: Dispatcher,
    command_rx: cbc::Receiver<Command>,
    snapshot_tx: cbc::Sender<Vec<CarSnapshot>>,
}

impl Controller {
    pub fn new(
        dispatcher: Dispatcher,
        command_rx: cbc::Receiver<Command>,
        snapshot_tx: cbc::Sender<Vec<CarSnapshot>>,
    ) -> Controller {
        Controller {
            dispatcher,
            command_rx,
            snapshot_tx,
        }
    }

    /// Runs until told to terminate or every sender is gone, then hands the dispatcher back.
    pub fn run(mut self) -> Dispatcher {
        info!("Controller up and running");

        loop {
            match self.wait_for_event() {
                Event::Terminate => break,
                event => self.handle_event(event),
            }
        }

        info!("Controller terminated");
        self.dispatcher
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::RequestReceived(request) => {
                let assignment = self.dispatcher.request(request.floor, request.direction);
                if assignment == Assignment::Deferred {
                    info!(
                        "{} call at floor {} waiting, {} in backlog",
                        request.direction,
                        request.floor,
                        self.dispatcher.deferred().len()
                    );
                }
            }

            Event::Tick => {
                self.dispatcher.step();

                // A missing listener is not fatal, the simulation keeps its state
                if self.snapshot_tx.send(self.dispatcher.snapshot()).is_err() {
                    error!("Snapshot receiver disconnected");
                }
            }

            Event::Terminate => (),
        }
    }

    fn wait_for_event(&self) -> Event {
        match self.command_rx.recv() {
            Ok(Command::Request(request)) => Event::RequestReceived(request),
            Ok(Command::Tick) => Event::Tick,
            Ok(Command::Terminate) => Event::Terminate,
            Err(_) => {
                info!("All command senders dropped");
                Event::Terminate
            }
        }
    }
}
