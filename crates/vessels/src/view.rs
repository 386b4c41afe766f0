//! Serializable read models handed to callers outside the domain.

use serde::Serialize;

use fleet_core::AggregateRoot;

use crate::imo::ImoNumber;
use crate::passenger::Passenger;
use crate::passenger_ship::PassengerShip;
use crate::ship::{Ship, ShipKind};
use crate::tank::Tank;
use crate::tanker_ship::TankerShip;

/// Point-in-time copy of a ship, detached from any lock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipView {
    pub imo: ImoNumber,
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub kind: ShipKind,
    pub version: u64,
    #[serde(flatten)]
    pub details: ShipDetails,
}

/// Variant-specific part of a [`ShipView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShipDetails {
    Passenger {
        passenger_count: usize,
        passengers: Vec<Passenger>,
    },
    Tanker {
        tank_count: usize,
        tanks: Vec<Tank>,
    },
}

impl From<&PassengerShip> for ShipView {
    fn from(ship: &PassengerShip) -> Self {
        Self {
            imo: ship.imo().clone(),
            name: ship.name().to_owned(),
            length: ship.length(),
            width: ship.width(),
            kind: ShipKind::Passenger,
            version: ship.version(),
            details: ShipDetails::Passenger {
                passenger_count: ship.passenger_count(),
                passengers: ship.get_all_passengers().to_vec(),
            },
        }
    }
}

impl From<&TankerShip> for ShipView {
    fn from(ship: &TankerShip) -> Self {
        Self {
            imo: ship.imo().clone(),
            name: ship.name().to_owned(),
            length: ship.length(),
            width: ship.width(),
            kind: ShipKind::Tanker,
            version: ship.version(),
            details: ShipDetails::Tanker {
                tank_count: ship.tank_count(),
                tanks: ship.get_all_tanks().to_vec(),
            },
        }
    }
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        match ship {
            Ship::Passenger(s) => s.into(),
            Ship::Tanker(s) => s.into(),
        }
    }
}
