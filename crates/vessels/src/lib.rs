//! Vessel domain module.
//!
//! Ships, their passengers and fuel tanks, implemented purely as deterministic
//! domain logic (no IO, no locking, no storage). Every constructor validates
//! before the value exists and every mutator is all-or-nothing.

pub mod hull;
pub mod imo;
pub mod passenger;
pub mod passenger_ship;
pub mod ship;
pub mod tank;
pub mod tanker_ship;
pub mod view;

pub use hull::{Hull, MINIMAL_LENGTH, MINIMAL_WIDTH};
pub use imo::ImoNumber;
pub use passenger::{NewPassenger, Passenger};
pub use passenger_ship::PassengerShip;
pub use ship::{Ship, ShipKind};
pub use tank::{FuelType, Tank};
pub use tanker_ship::TankerShip;
pub use view::{ShipDetails, ShipView};
