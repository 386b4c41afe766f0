use std::sync::Arc;

use fleet_core::FleetResult;
use fleet_vessels::{Ship, ShipKind};

use crate::handle::{PassengerShipHandle, ShipHandle, TankerShipHandle};

/// Registry of ships keyed by IMO number.
///
/// Lookups compare the given text with the registered identifier verbatim; an
/// invalid identifier is simply never found.
pub trait ShipStore: Send + Sync {
    /// Register a ship. Fails with `ShipAlreadyExists` if its IMO number is taken.
    fn add(&self, ship: Ship) -> FleetResult<ShipHandle>;

    /// Deregister a ship, returning it. Fails with `ShipNotFound`.
    fn remove(&self, imo: &str) -> FleetResult<ShipHandle>;

    /// Fails with `ShipNotFound` when the caller expected the ship to exist.
    fn get_by_imo(&self, imo: &str) -> FleetResult<ShipHandle>;

    /// `None` both when the ship is unknown and when it is a tanker.
    fn get_passenger_ship(&self, imo: &str) -> Option<PassengerShipHandle>;

    /// `None` both when the ship is unknown and when it carries passengers.
    fn get_tanker_ship(&self, imo: &str) -> Option<TankerShipHandle>;

    fn exists(&self, imo: &str) -> bool;

    /// Every registered ship, in no particular order.
    fn get_all(&self) -> Vec<ShipHandle>;

    /// Ships of one variant; possibly none.
    fn get_by_kind(&self, kind: ShipKind) -> Vec<ShipHandle>;
}

impl<S> ShipStore for Arc<S>
where
    S: ShipStore + ?Sized,
{
    fn add(&self, ship: Ship) -> FleetResult<ShipHandle> {
        (**self).add(ship)
    }

    fn remove(&self, imo: &str) -> FleetResult<ShipHandle> {
        (**self).remove(imo)
    }

    fn get_by_imo(&self, imo: &str) -> FleetResult<ShipHandle> {
        (**self).get_by_imo(imo)
    }

    fn get_passenger_ship(&self, imo: &str) -> Option<PassengerShipHandle> {
        (**self).get_passenger_ship(imo)
    }

    fn get_tanker_ship(&self, imo: &str) -> Option<TankerShipHandle> {
        (**self).get_tanker_ship(imo)
    }

    fn exists(&self, imo: &str) -> bool {
        (**self).exists(imo)
    }

    fn get_all(&self) -> Vec<ShipHandle> {
        (**self).get_all()
    }

    fn get_by_kind(&self, kind: ShipKind) -> Vec<ShipHandle> {
        (**self).get_by_kind(kind)
    }
}
