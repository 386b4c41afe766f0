use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use fleet_core::{FleetError, FleetResult};
use fleet_vessels::{ImoNumber, Ship, ShipKind, ShipView};

use crate::handle::{PassengerShipHandle, ShipHandle, TankerShipHandle};
use crate::store::ShipStore;

#[derive(Debug, Clone)]
struct Registration {
    handle: ShipHandle,
    registered_at: DateTime<Utc>,
}

/// Read model of one registry entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredShip {
    pub registered_at: DateTime<Utc>,
    #[serde(flatten)]
    pub ship: ShipView,
}

/// Process-wide in-memory ship registry.
///
/// The membership map has its own lock; each ship is locked independently
/// through its [`ShipHandle`]. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryShipRegistry {
    ships: RwLock<HashMap<ImoNumber, Registration>>,
}

impl InMemoryShipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }

    /// Point-in-time views of every registered ship, ordered by IMO number.
    pub fn snapshot(&self) -> Vec<RegisteredShip> {
        let registrations: Vec<Registration> = self.members().values().cloned().collect();

        // Ship locks are taken after the membership lock is released.
        let mut out: Vec<RegisteredShip> = registrations
            .into_iter()
            .map(|r| RegisteredShip {
                registered_at: r.registered_at,
                ship: r.handle.view(),
            })
            .collect();
        out.sort_by(|a, b| a.ship.imo.cmp(&b.ship.imo));
        out
    }

    fn members(&self) -> RwLockReadGuard<'_, HashMap<ImoNumber, Registration>> {
        // Membership changes are single inserts/removes, so a poisoned map is
        // still consistent.
        self.ships.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn members_mut(&self) -> RwLockWriteGuard<'_, HashMap<ImoNumber, Registration>> {
        self.ships.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, imo: &str) -> Option<ShipHandle> {
        let handle = self.members().get(imo).map(|r| r.handle.clone());
        if handle.is_none() {
            tracing::debug!(imo, "ship lookup missed");
        }
        handle
    }
}

impl ShipStore for InMemoryShipRegistry {
    fn add(&self, ship: Ship) -> FleetResult<ShipHandle> {
        let imo = ship.imo().clone();
        let kind = ship.kind();

        let handle = match self.members_mut().entry(imo.clone()) {
            Entry::Occupied(_) => {
                tracing::warn!(imo = %imo, "rejected duplicate ship registration");
                return Err(FleetError::ship_already_exists(imo.as_str()));
            }
            Entry::Vacant(slot) => {
                let handle = ShipHandle::register(ship);
                slot.insert(Registration {
                    handle: handle.clone(),
                    registered_at: Utc::now(),
                });
                handle
            }
        };

        tracing::info!(imo = %imo, %kind, "ship registered");
        Ok(handle)
    }

    fn remove(&self, imo: &str) -> FleetResult<ShipHandle> {
        let removed = self.members_mut().remove(imo);
        match removed {
            Some(registration) => {
                tracing::info!(imo, kind = %registration.handle.kind(), "ship removed");
                Ok(registration.handle)
            }
            None => Err(FleetError::ship_not_found(imo)),
        }
    }

    fn get_by_imo(&self, imo: &str) -> FleetResult<ShipHandle> {
        self.lookup(imo)
            .ok_or_else(|| FleetError::ship_not_found(imo))
    }

    fn get_passenger_ship(&self, imo: &str) -> Option<PassengerShipHandle> {
        match self.lookup(imo)? {
            ShipHandle::Passenger(h) => Some(h),
            ShipHandle::Tanker(_) => None,
        }
    }

    fn get_tanker_ship(&self, imo: &str) -> Option<TankerShipHandle> {
        match self.lookup(imo)? {
            ShipHandle::Tanker(h) => Some(h),
            ShipHandle::Passenger(_) => None,
        }
    }

    fn exists(&self, imo: &str) -> bool {
        self.members().contains_key(imo)
    }

    fn get_all(&self) -> Vec<ShipHandle> {
        self.members().values().map(|r| r.handle.clone()).collect()
    }

    fn get_by_kind(&self, kind: ShipKind) -> Vec<ShipHandle> {
        self.members()
            .values()
            .filter(|r| r.handle.kind() == kind)
            .map(|r| r.handle.clone())
            .collect()
    }
}
