//! Ship registry: the single source of truth mapping IMO numbers to ships.
//!
//! Membership is guarded by one lock; every ship sits behind its own lock so
//! traffic on unrelated ships never serializes.

pub mod handle;
pub mod in_memory;
pub mod store;

pub use handle::{PassengerShipHandle, SharedShip, ShipHandle, TankerShipHandle};
pub use in_memory::{InMemoryShipRegistry, RegisteredShip};
pub use store::ShipStore;
