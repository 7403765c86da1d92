#[macro_use]
pub mod macros;
pub mod error;
pub mod structs;

pub use error::ConfigError;
pub use error::DispatchError;
pub use structs::CallDirection;
pub use structs::CarSnapshot;
pub use structs::Direction;
pub use structs::PickupRequest;
pub use structs::Status;
