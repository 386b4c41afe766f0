use fleet_core::{AggregateRoot, FleetError, FleetResult, PassengerId};

use crate::hull::Hull;
use crate::imo::ImoNumber;
use crate::passenger::{NewPassenger, Passenger};
use crate::ship::ShipKind;

/// Aggregate root: a ship carrying passengers.
///
/// Passengers are kept in boarding order and `passenger_count` always equals
/// the number of passengers aboard.
#[derive(Debug, Clone)]
pub struct PassengerShip {
    hull: Hull,
    passengers: Vec<Passenger>,
    passenger_count: usize,
    version: u64,
}

impl PassengerShip {
    /// Build a passenger ship with an initial manifest.
    ///
    /// The hull is validated first, then every passenger with the same rule as
    /// [`PassengerShip::add_passenger`]. Each passenger gets a fresh id.
    pub fn new(
        imo: &str,
        name: &str,
        length: f64,
        width: f64,
        passengers: impl IntoIterator<Item = NewPassenger>,
    ) -> FleetResult<Self> {
        let hull = Hull::new(imo, name, length, width)?;
        let passengers = passengers
            .into_iter()
            .map(|p| Passenger::board(&p.name, &p.surname))
            .collect::<FleetResult<Vec<_>>>()?;

        Ok(Self {
            hull,
            passenger_count: passengers.len(),
            passengers,
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
        ShipKind::Passenger
    }

    pub fn passenger_count(&self) -> usize {
        self.passenger_count
    }

    /// Board a new passenger at the end of the manifest.
    pub fn add_passenger(&mut self, name: &str, surname: &str) -> FleetResult<PassengerId> {
        let passenger = Passenger::board(name, surname)?;
        let id = passenger.passenger_id();

        self.passengers.push(passenger);
        self.passenger_count += 1;
        self.version += 1;
        Ok(id)
    }

    /// Unknown ids are reported before invalid names.
    pub fn update_passenger_info(
        &mut self,
        passenger_id: PassengerId,
        new_name: &str,
        new_surname: &str,
    ) -> FleetResult<()> {
        let passenger = self
            .passengers
            .iter_mut()
            .find(|p| p.passenger_id() == passenger_id)
            .ok_or(FleetError::PassengerNotFound(passenger_id))?;

        passenger.rename(new_name, new_surname)?;
        self.version += 1;
        Ok(())
    }

    pub fn remove_passenger_by_id(&mut self, passenger_id: PassengerId) -> FleetResult<Passenger> {
        let index = self
            .passengers
            .iter()
            .position(|p| p.passenger_id() == passenger_id)
            .ok_or(FleetError::PassengerNotFound(passenger_id))?;

        let removed = self.passengers.remove(index);
        self.passenger_count -= 1;
        self.version += 1;
        Ok(removed)
    }

    pub fn get_passenger_by_id(&self, passenger_id: PassengerId) -> FleetResult<&Passenger> {
        self.passengers
            .iter()
            .find(|p| p.passenger_id() == passenger_id)
            .ok_or(FleetError::PassengerNotFound(passenger_id))
    }

    /// All passengers in boarding order.
    pub fn get_all_passengers(&self) -> &[Passenger] {
        &self.passengers
    }
}

impl AggregateRoot for PassengerShip {
    type Id = ImoNumber;

    fn id(&self) -> &Self::Id {
        self.hull.imo()
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl PartialEq for PassengerShip {
    fn eq(&self, other: &Self) -> bool {
        self.imo() == other.imo()
    }
}

impl Eq for PassengerShip {}

impl core::hash::Hash for PassengerShip {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.imo().hash(state);
    }
}
