//! Particulars shared by every ship variant.

use fleet_core::{FleetError, FleetResult};

use crate::imo::ImoNumber;

/// Length must be strictly greater than this.
pub const MINIMAL_LENGTH: f64 = 1.0;
/// Width must be strictly greater than this.
pub const MINIMAL_WIDTH: f64 = 1.0;

/// Identifier, name and main dimensions of a ship.
///
/// Validated once at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    imo: ImoNumber,
    name: String,
    length: f64,
    width: f64,
}

impl Hull {
    /// Validates identifier, name, length, width in that order; the first
    /// violated rule is reported and the rest are not evaluated.
    pub fn new(imo: &str, name: &str, length: f64, width: f64) -> FleetResult<Self> {
        let imo = ImoNumber::parse(imo)?;

        if name.trim().is_empty() {
            return Err(FleetError::InvalidShipName);
        }
        if !(length > MINIMAL_LENGTH) {
            return Err(FleetError::InvalidShipLength(format!(
                "Length must be greater than {MINIMAL_LENGTH}."
            )));
        }
        if !(width > MINIMAL_WIDTH) {
            return Err(FleetError::InvalidShipWidth(format!(
                "Width must be greater than {MINIMAL_WIDTH}."
            )));
        }

        Ok(Self {
            imo,
            name: name.to_owned(),
            length,
            width,
        })
    }

    pub fn imo(&self) -> &ImoNumber {
        &self.imo
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_particulars_are_kept() {
        let hull = Hull::new("IMO9224764", "Ocean Explorer", 300.5, 50.2).unwrap();
        assert_eq!(hull.imo().as_str(), "IMO9224764");
        assert_eq!(hull.name(), "Ocean Explorer");
        assert_eq!(hull.length(), 300.5);
        assert_eq!(hull.width(), 50.2);
    }

    #[test]
    fn boundary_dimension_is_rejected() {
        assert_eq!(
            Hull::new("IMO9224764", "Ship", 1.0, 10.0).unwrap_err(),
            FleetError::InvalidShipLength("Length must be greater than 1.".to_string())
        );
        assert_eq!(
            Hull::new("IMO9224764", "Ship", 10.0, 1.0).unwrap_err(),
            FleetError::InvalidShipWidth("Width must be greater than 1.".to_string())
        );
        assert!(Hull::new("IMO9224764", "Ship", 1.001, 1.001).is_ok());
        assert!(Hull::new("IMO9224764", "Ship", f64::NAN, 10.0).is_err());
    }

    #[test]
    fn first_violation_wins() {
        match Hull::new("IMO1234568", "", 0.0, 0.0).unwrap_err() {
            FleetError::InvalidImoNumber(_) => {}
            other => panic!("Expected InvalidImoNumber, got {other:?}"),
        }
        assert_eq!(
            Hull::new("IMO9224764", "  ", 0.0, 0.0).unwrap_err(),
            FleetError::InvalidShipName
        );
        match Hull::new("IMO9224764", "Ship", 0.5, 0.0).unwrap_err() {
            FleetError::InvalidShipLength(_) => {}
            other => panic!("Expected InvalidShipLength, got {other:?}"),
        }
    }
}
