//! Demo fleet registered at startup.

use fleet_core::FleetResult;
use fleet_registry::{ShipHandle, ShipStore};
use fleet_vessels::{FuelType, NewPassenger, PassengerShip, Tank, TankerShip};

pub const DEMO_PASSENGER_SHIP: &str = "IMO9224764";
pub const DEMO_TANKER_SHIP: &str = "IMO9829930";

/// Register "Ocean Explorer" (two passengers) and "Oil Titan" (two tanks).
pub fn seed_demo_fleet(store: &impl ShipStore) -> FleetResult<Vec<ShipHandle>> {
    let explorer = PassengerShip::new(
        DEMO_PASSENGER_SHIP,
        "Ocean Explorer",
        300.5,
        50.2,
        [
            NewPassenger::new("John", "Doe"),
            NewPassenger::new("Jane", "Smith"),
        ],
    )?;

    let titan = TankerShip::new(
        DEMO_TANKER_SHIP,
        "Oil Titan",
        400.0,
        60.0,
        [
            Tank::new(FuelType::Diesel, 100000.0)?,
            Tank::new(FuelType::HeavyFuel, 200000.0)?,
        ],
    )?;

    Ok(vec![store.add(explorer.into())?, store.add(titan.into())?])
}
