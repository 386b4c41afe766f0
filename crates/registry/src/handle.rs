//! Lock-guarded, shareable references to registered ships.

use std::sync::{Arc, PoisonError, RwLock};

use fleet_vessels::{ImoNumber, PassengerShip, Ship, ShipKind, ShipView, TankerShip};

/// A ship shared between the registry and its callers.
///
/// Cloning is cheap and yields another reference to the same ship. Reads may
/// run concurrently; writes to one ship are serialized.
#[derive(Debug)]
pub struct SharedShip<T> {
    imo: ImoNumber,
    inner: Arc<RwLock<T>>,
}

pub type PassengerShipHandle = SharedShip<PassengerShip>;
pub type TankerShipHandle = SharedShip<TankerShip>;

impl<T> SharedShip<T> {
    fn new(imo: ImoNumber, ship: T) -> Self {
        Self {
            imo,
            inner: Arc::new(RwLock::new(ship)),
        }
    }

    /// The identifier never changes, so it is readable without locking.
    pub fn imo(&self) -> &ImoNumber {
        &self.imo
    }

    /// Run `f` with shared access to the ship.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        // Domain operations are all-or-nothing, so a poisoned guard still
        // protects a consistent ship.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Run `f` with exclusive access to the ship.
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    /// `true` when both handles point at the same registered ship.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for SharedShip<T> {
    fn clone(&self) -> Self {
        Self {
            imo: self.imo.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

/// A registered ship of either variant.
#[derive(Debug, Clone)]
pub enum ShipHandle {
    Passenger(PassengerShipHandle),
    Tanker(TankerShipHandle),
}

impl ShipHandle {
    pub(crate) fn register(ship: Ship) -> Self {
        match ship {
            Ship::Passenger(s) => ShipHandle::Passenger(SharedShip::new(s.imo().clone(), s)),
            Ship::Tanker(s) => ShipHandle::Tanker(SharedShip::new(s.imo().clone(), s)),
        }
    }

    pub fn imo(&self) -> &ImoNumber {
        match self {
            ShipHandle::Passenger(h) => h.imo(),
            ShipHandle::Tanker(h) => h.imo(),
        }
    }

    pub fn kind(&self) -> ShipKind {
        match self {
            ShipHandle::Passenger(_) => ShipKind::Passenger,
            ShipHandle::Tanker(_) => ShipKind::Tanker,
        }
    }

    pub fn as_passenger(&self) -> Option<&PassengerShipHandle> {
        match self {
            ShipHandle::Passenger(h) => Some(h),
            ShipHandle::Tanker(_) => None,
        }
    }

    pub fn as_tanker(&self) -> Option<&TankerShipHandle> {
        match self {
            ShipHandle::Tanker(h) => Some(h),
            ShipHandle::Passenger(_) => None,
        }
    }

    /// Snapshot of the ship's current state.
    pub fn view(&self) -> ShipView {
        match self {
            ShipHandle::Passenger(h) => h.read(|s| ShipView::from(s)),
            ShipHandle::Tanker(h) => h.read(|s| ShipView::from(s)),
        }
    }

    /// Detached copy of the ship itself.
    pub fn to_ship(&self) -> Ship {
        match self {
            ShipHandle::Passenger(h) => Ship::Passenger(h.read(PassengerShip::clone)),
            ShipHandle::Tanker(h) => Ship::Tanker(h.read(TankerShip::clone)),
        }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ShipHandle::Passenger(a), ShipHandle::Passenger(b)) => a.ptr_eq(b),
            (ShipHandle::Tanker(a), ShipHandle::Tanker(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}
