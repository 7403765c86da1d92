pub mod controller;
pub mod controller_tests;
pub mod dispatcher;

pub use controller::Command;
pub use controller::Controller;
pub use dispatcher::Assignment;
pub use dispatcher::Dispatcher;
