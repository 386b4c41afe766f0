//! Domain error model.

use thiserror::Error;

use crate::id::{PassengerId, TankId};

/// Result type used across the fleet domain.
pub type FleetResult<T> = Result<T, FleetError>;

/// Fleet domain error.
///
/// Every variant is a recoverable, caller-reportable condition. Operations that
/// return one of these leave the aggregate exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FleetError {
    /// Malformed or checksum-mismatched IMO number.
    #[error("{0}")]
    InvalidImoNumber(String),

    #[error("Ship name cannot be null or empty.")]
    InvalidShipName,

    #[error("{0}")]
    InvalidShipLength(String),

    #[error("{0}")]
    InvalidShipWidth(String),

    /// Empty name or surname on passenger add/update.
    #[error("{0}")]
    InvalidPassengerData(String),

    #[error("Passenger with ID {0} not found.")]
    PassengerNotFound(PassengerId),

    #[error("Tank capacity must be greater than zero.")]
    InvalidTankCapacity,

    #[error("{0}")]
    InvalidTankFillAmount(String),

    #[error(
        "Cannot fill tank {tank_id}. Adding {attempted} liters would exceed the capacity of {capacity} liters."
    )]
    TankOverfill {
        tank_id: TankId,
        attempted: f64,
        capacity: f64,
    },

    #[error("Tank {0} is already empty.")]
    TankAlreadyEmpty(TankId),

    #[error("Tank {0} does not exist.")]
    TankNotFound(TankId),

    #[error("Ship with IMO '{0}' already exists.")]
    ShipAlreadyExists(String),

    #[error("Ship with IMO '{0}' not found.")]
    ShipNotFound(String),
}

impl FleetError {
    pub fn invalid_imo(msg: impl Into<String>) -> Self {
        Self::InvalidImoNumber(msg.into())
    }

    pub fn invalid_passenger(msg: impl Into<String>) -> Self {
        Self::InvalidPassengerData(msg.into())
    }

    pub fn invalid_fill_amount(msg: impl Into<String>) -> Self {
        Self::InvalidTankFillAmount(msg.into())
    }

    pub fn ship_not_found(imo: impl Into<String>) -> Self {
        Self::ShipNotFound(imo.into())
    }

    pub fn ship_already_exists(imo: impl Into<String>) -> Self {
        Self::ShipAlreadyExists(imo.into())
    }

    /// Stable machine-readable code, suitable for an adapter's error body.
    pub fn kind(&self) -> &'static str {
        match self {
            FleetError::InvalidImoNumber(_) => "invalid_imo_number",
            FleetError::InvalidShipName => "invalid_ship_name",
            FleetError::InvalidShipLength(_) => "invalid_ship_length",
            FleetError::InvalidShipWidth(_) => "invalid_ship_width",
            FleetError::InvalidPassengerData(_) => "invalid_passenger_data",
            FleetError::PassengerNotFound(_) => "passenger_not_found",
            FleetError::InvalidTankCapacity => "invalid_tank_capacity",
            FleetError::InvalidTankFillAmount(_) => "invalid_tank_fill_amount",
            FleetError::TankOverfill { .. } => "tank_overfill",
            FleetError::TankAlreadyEmpty(_) => "tank_already_empty",
            FleetError::TankNotFound(_) => "tank_not_found",
            FleetError::ShipAlreadyExists(_) => "ship_already_exists",
            FleetError::ShipNotFound(_) => "ship_not_found",
        }
    }

    /// `true` for the lookup-miss family (ship, passenger, tank).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FleetError::ShipNotFound(_)
                | FleetError::PassengerNotFound(_)
                | FleetError::TankNotFound(_)
        )
    }
}
