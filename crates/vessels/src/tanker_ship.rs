use fleet_core::{AggregateRoot, FleetError, FleetResult, TankId};

use crate::hull::Hull;
use crate::imo::ImoNumber;
use crate::ship::ShipKind;
use crate::tank::Tank;

/// Aggregate root: a ship carrying fuel tanks.
///
/// The set of tanks is fixed at construction; only their levels change.
#[derive(Debug, Clone)]
pub struct TankerShip {
    hull: Hull,
    tanks: Vec<Tank>,
    tank_count: usize,
    version: u64,
}

impl TankerShip {
    pub fn new(
        imo: &str,
        name: &str,
        length: f64,
        width: f64,
        tanks: impl IntoIterator<Item = Tank>,
    ) -> FleetResult<Self> {
        let hull = Hull::new(imo, name, length, width)?;
        let tanks: Vec<Tank> = tanks.into_iter().collect();

        Ok(Self {
            hull,
            tank_count: tanks.len(),
            tanks,
            version: 0,
        })
    }

    pub fn hull(&self) -> &Hull {
        &self.hull
    }

    pub fn imo(&self) -> &ImoNumber {
        self.hull.imo()
    }

    pub fn name(&self) -> &str {
        self.hull.name()
    }

    pub fn length(&self) -> f64 {
        self.hull.length()
    }

    pub fn width(&self) -> f64 {
        self.hull.width()
    }

    pub fn kind(&self) -> ShipKind {
        ShipKind::Tanker
    }

    /// Number of tanks fitted at construction.
    pub fn tank_count(&self) -> usize {
        self.tank_count
    }

    pub fn total_capacity(&self) -> f64 {
        self.tanks.iter().map(Tank::capacity).sum()
    }

    pub fn total_fuel(&self) -> f64 {
        self.tanks.iter().map(Tank::current_level).sum()
    }

    pub fn fill_tank(&mut self, tank_id: TankId, liters: f64) -> FleetResult<()> {
        self.tank_mut(tank_id)?.fill(liters)?;
        self.version += 1;
        Ok(())
    }

    /// Drain a tank completely, returning the liters removed.
    pub fn empty_tank(&mut self, tank_id: TankId) -> FleetResult<f64> {
        let drained = self.tank_mut(tank_id)?.fully_empty()?;
        self.version += 1;
        Ok(drained)
    }

    pub fn get_tank(&self, tank_id: TankId) -> FleetResult<&Tank> {
        self.tanks
            .iter()
            .find(|t| t.tank_id() == tank_id)
            .ok_or(FleetError::TankNotFound(tank_id))
    }

    /// All tanks in the order they were fitted.
    pub fn get_all_tanks(&self) -> &[Tank] {
        &self.tanks
    }

    fn tank_mut(&mut self, tank_id: TankId) -> FleetResult<&mut Tank> {
        self.tanks
            .iter_mut()
            .find(|t| t.tank_id() == tank_id)
            .ok_or(FleetError::TankNotFound(tank_id))
    }
}

impl AggregateRoot for TankerShip {
    type Id = ImoNumber;

    fn id(&self) -> &Self::Id {
        self.hull.imo()
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl PartialEq for TankerShip {
    fn eq(&self, other: &Self) -> bool {
        self.imo() == other.imo()
    }
}

impl Eq for TankerShip {}

impl core::hash::Hash for TankerShip {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.imo().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tank::FuelType;

    fn oil_titan() -> TankerShip {
        TankerShip::new(
            "IMO9829930",
            "Oil Titan",
            400.0,
            60.0,
            [
                Tank::new(FuelType::Diesel, 100.0).unwrap(),
                Tank::new(FuelType::HeavyFuel, 100.0).unwrap(),
            ],
        )
        .unwrap()
    }

    fn first_tank(ship: &TankerShip) -> TankId {
        ship.get_all_tanks()[0].tank_id()
    }

    #[test]
    fn construction_counts_tanks() {
        let ship = oil_titan();
        assert_eq!(ship.tank_count(), 2);
        assert_eq!(ship.kind(), ShipKind::Tanker);
        assert_eq!(ship.total_capacity(), 200.0);
        assert_eq!(ship.total_fuel(), 0.0);
    }

    #[test]
    fn fill_accumulates() {
        let mut ship = oil_titan();
        let id = first_tank(&ship);
        ship.fill_tank(id, 10.0).unwrap();
        ship.fill_tank(id, 50.0).unwrap();
        assert_eq!(ship.get_tank(id).unwrap().current_level(), 60.0);
        assert_eq!(ship.version(), 2);
    }

    #[test]
    fn fill_reaches_capacity_then_overfills() {
        let mut ship = oil_titan();
        let id = first_tank(&ship);
        ship.fill_tank(id, 25.0).unwrap();
        let rest = {
            let tank = ship.get_tank(id).unwrap();
            tank.capacity() - tank.current_level()
        };
        ship.fill_tank(id, rest).unwrap();
        assert_eq!(ship.get_tank(id).unwrap().current_level(), 100.0);

        match ship.fill_tank(id, 1.0).unwrap_err() {
            FleetError::TankOverfill { tank_id, .. } => assert_eq!(tank_id, id),
            other => panic!("Expected TankOverfill, got {other:?}"),
        }
        assert_eq!(ship.version(), 2);
    }

    #[test]
    fn invalid_amount_is_reported() {
        let mut ship = oil_titan();
        let id = first_tank(&ship);
        match ship.fill_tank(id, -1.0).unwrap_err() {
            FleetError::InvalidTankFillAmount(_) => {}
            other => panic!("Expected InvalidTankFillAmount, got {other:?}"),
        }
    }

    #[test]
    fn unknown_tank_is_reported_for_every_operation() {
        let mut ship = oil_titan();
        let unknown = TankId::new();
        assert_eq!(
            ship.fill_tank(unknown, 10.0).unwrap_err(),
            FleetError::TankNotFound(unknown)
        );
        assert_eq!(
            ship.empty_tank(unknown).unwrap_err(),
            FleetError::TankNotFound(unknown)
        );
        assert_eq!(
            ship.get_tank(unknown).unwrap_err(),
            FleetError::TankNotFound(unknown)
        );
    }

    #[test]
    fn empty_twice_fails_second_time() {
        let mut ship = oil_titan();
        let id = first_tank(&ship);
        ship.fill_tank(id, 10.0).unwrap();

        assert_eq!(ship.empty_tank(id).unwrap(), 10.0);
        assert_eq!(ship.get_tank(id).unwrap().current_level(), 0.0);
        assert_eq!(
            ship.empty_tank(id).unwrap_err(),
            FleetError::TankAlreadyEmpty(id)
        );
    }

    #[test]
    fn tanks_keep_construction_order() {
        let ship = oil_titan();
        let fuels: Vec<_> = ship.get_all_tanks().iter().map(Tank::fuel_type).collect();
        assert_eq!(fuels, [FuelType::Diesel, FuelType::HeavyFuel]);
    }

    #[test]
    fn invalid_hull_is_rejected() {
        let err = TankerShip::new("IMO9829930", "Oil Titan", 400.0, 0.5, Vec::<Tank>::new())
            .unwrap_err();
        match err {
            FleetError::InvalidShipWidth(_) => {}
            other => panic!("Expected InvalidShipWidth, got {other:?}"),
        }
    }
}
