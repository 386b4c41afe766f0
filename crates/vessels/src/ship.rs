use serde::{Deserialize, Serialize};

use fleet_core::AggregateRoot;

use crate::hull::Hull;
use crate::imo::ImoNumber;
use crate::passenger_ship::PassengerShip;
use crate::tanker_ship::TankerShip;

/// Discriminator of the closed set of ship variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipKind {
    Passenger,
    Tanker,
}

impl core::fmt::Display for ShipKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ShipKind::Passenger => "passenger",
            ShipKind::Tanker => "tanker",
        })
    }
}

/// Any ship of the fleet.
///
/// Both variants share a [`Hull`]; variant-specific operations are reached by
/// matching on the tag.
#[derive(Debug, Clone)]
pub enum Ship {
    Passenger(PassengerShip),
    Tanker(TankerShip),
}

impl Ship {
    pub fn hull(&self) -> &Hull {
        match self {
            Ship::Passenger(s) => s.hull(),
            Ship::Tanker(s) => s.hull(),
        }
    }

    pub fn imo(&self) -> &ImoNumber {
        self.hull().imo()
    }

    pub fn name(&self) -> &str {
        self.hull().name()
    }

    pub fn length(&self) -> f64 {
        self.hull().length()
    }

    pub fn width(&self) -> f64 {
        self.hull().width()
    }

    pub fn kind(&self) -> ShipKind {
        match self {
            Ship::Passenger(_) => ShipKind::Passenger,
            Ship::Tanker(_) => ShipKind::Tanker,
        }
    }

    pub fn as_passenger(&self) -> Option<&PassengerShip> {
        match self {
            Ship::Passenger(s) => Some(s),
            Ship::Tanker(_) => None,
        }
    }

    pub fn as_tanker(&self) -> Option<&TankerShip> {
        match self {
            Ship::Tanker(s) => Some(s),
            Ship::Passenger(_) => None,
        }
    }
}

impl AggregateRoot for Ship {
    type Id = ImoNumber;

    fn id(&self) -> &Self::Id {
        self.imo()
    }

    fn version(&self) -> u64 {
        match self {
            Ship::Passenger(s) => s.version(),
            Ship::Tanker(s) => s.version(),
        }
    }
}

impl From<PassengerShip> for Ship {
    fn from(value: PassengerShip) -> Self {
        Ship::Passenger(value)
    }
}

impl From<TankerShip> for Ship {
    fn from(value: TankerShip) -> Self {
        Ship::Tanker(value)
    }
}

impl PartialEq for Ship {
    fn eq(&self, other: &Self) -> bool {
        self.imo() == other.imo()
    }
}

impl Eq for Ship {}

impl core::hash::Hash for Ship {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.imo().hash(state);
    }
}
