/*
 * Unit tests for the controller thread
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_controller_publishes_snapshot_per_tick
 *  - test_controller_keeps_command_order
 *  - test_controller_serves_many_producers
 *  - test_controller_stops_when_senders_drop
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod controller_tests {
    use crate::coordinator::{Command, Controller, Dispatcher};
    use crate::shared::CallDirection::{Down, Up};
    use crate::shared::Direction::Idle;
    use crate::shared::Status::Stopped;
    use crate::shared::{CarSnapshot, PickupRequest};
    use crossbeam_channel::{unbounded, Receiver, Sender};
    use std::thread::Builder;
    use std::time::Duration;

    fn setup_controller(
        n_cars: usize,
    ) -> (
        Controller,
        Sender<Command>,          // command_tx
        Receiver<Vec<CarSnapshot>>, // snapshot_rx
    ) {
        // Arrange mock channels
        let (command_tx, command_rx) = unbounded::<Command>();
        let (snapshot_tx, snapshot_rx) = unbounded::<Vec<CarSnapshot>>();

        let dispatcher = Dispatcher::new(n_cars, 10).unwrap();

        (
            Controller::new(dispatcher, command_rx, snapshot_tx),
            command_tx,
            snapshot_rx,
        )
    }

    fn recv_snapshot(snapshot_rx: &Receiver<Vec<CarSnapshot>>) -> Vec<CarSnapshot> {
        match snapshot_rx.recv_timeout(Duration::from_secs(3)) {
            Ok(snapshot) => snapshot,
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                panic!("Timed out waiting for snapshot_rx");
            }
            Err(e) => {
                panic!("Error receiving from snapshot_rx: {:?}", e);
            }
        }
    }

    #[test]
    fn test_controller_publishes_snapshot_per_tick() {
        // Arrange
        let (controller, command_tx, snapshot_rx) = setup_controller(2);
        let controller_thread = Builder::new()
            .name("controller".into())
            .spawn(move || controller.run())
            .unwrap();

        // Act
        command_tx.send(Command::Tick).unwrap();
        command_tx.send(Command::Tick).unwrap();

        // Assert
        for _ in 0..2 {
            let snapshot = recv_snapshot(&snapshot_rx);
            assert_eq!(snapshot.len(), 2);
            assert!(snapshot.iter().all(|car| car.direction == Idle));
        }

        // Cleanup
        command_tx.send(Command::Terminate).unwrap();
        controller_thread.join().unwrap();
    }

    #[test]
    fn test_controller_keeps_command_order() {
        // Purpose: A request sent before a tick is assigned before that tick runs

        // Arrange
        let (controller, command_tx, snapshot_rx) = setup_controller(1);
        let controller_thread = Builder::new()
            .name("controller".into())
            .spawn(move || controller.run())
            .unwrap();

        // Act
        command_tx
            .send(Command::Request(PickupRequest::new(2, Up)))
            .unwrap();
        command_tx.send(Command::Tick).unwrap();

        // Assert
        let snapshot = recv_snapshot(&snapshot_rx);
        assert_eq!(snapshot[0].current_floor, 1);
        assert_eq!(snapshot[0].pending_stops, vec![2]);

        command_tx.send(Command::Tick).unwrap();
        let snapshot = recv_snapshot(&snapshot_rx);
        assert_eq!(snapshot[0].current_floor, 2);
        assert_eq!(snapshot[0].status, Stopped);
        assert!(snapshot[0].pending_stops.is_empty());

        // Cleanup
        command_tx.send(Command::Terminate).unwrap();
        controller_thread.join().unwrap();
    }

    #[test]
    fn test_controller_serves_many_producers() {
        // Purpose: Requests from several threads all end up assigned to some car

        // Arrange
        let (controller, command_tx, _snapshot_rx) = setup_controller(3);
        let controller_thread = Builder::new()
            .name("controller".into())
            .spawn(move || controller.run())
            .unwrap();

        // Act
        let producers = (0..4)
            .map(|i| {
                let tx = command_tx.clone();
                Builder::new()
                    .name(format!("producer_{}", i))
                    .spawn(move || {
                        let direction = if i % 2 == 0 { Up } else { Down };
                        tx.send(Command::Request(PickupRequest::new(i + 1, direction)))
                            .unwrap();
                    })
                    .unwrap()
            })
            .collect::<Vec<_>>();
        for producer in producers {
            producer.join().unwrap();
        }
        command_tx.send(Command::Terminate).unwrap();
        let dispatcher = controller_thread.join().unwrap();

        // Assert
        let mut queued = dispatcher
            .cars()
            .iter()
            .flat_map(|car| car.pending_stops().to_vec())
            .collect::<Vec<i32>>();
        queued.sort_unstable();
        assert_eq!(queued, vec![1, 2, 3, 4]);
        assert!(dispatcher.deferred().is_empty());
    }

    #[test]
    fn test_controller_stops_when_senders_drop() {
        // Arrange
        let (controller, command_tx, _snapshot_rx) = setup_controller(1);
        let controller_thread = Builder::new()
            .name("controller".into())
            .spawn(move || controller.run())
            .unwrap();

        // Act
        drop(command_tx);

        // Assert
        let dispatcher = controller_thread.join().unwrap();
        assert_eq!(dispatcher.cars().len(), 1);
    }
}
