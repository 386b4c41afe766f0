use serde::{Deserialize, Serialize};

use fleet_core::{Entity, FleetError, FleetResult, PassengerId};

/// A person embarked on a passenger ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passenger {
    id: PassengerId,
    name: String,
    surname: String,
}

/// Name and surname of a passenger that has not boarded yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPassenger {
    pub name: String,
    pub surname: String,
}

impl NewPassenger {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }
}

impl Passenger {
    /// Board a passenger under a freshly assigned identifier.
    pub(crate) fn board(name: &str, surname: &str) -> FleetResult<Self> {
        ensure_names(name, surname)?;
        Ok(Self {
            id: PassengerId::new(),
            name: name.to_owned(),
            surname: surname.to_owned(),
        })
    }

    pub(crate) fn rename(&mut self, name: &str, surname: &str) -> FleetResult<()> {
        ensure_names(name, surname)?;
        self.name = name.to_owned();
        self.surname = surname.to_owned();
        Ok(())
    }

    pub fn passenger_id(&self) -> PassengerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }
}

impl Entity for Passenger {
    type Id = PassengerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Name is checked before surname.
fn ensure_names(name: &str, surname: &str) -> FleetResult<()> {
    if name.trim().is_empty() {
        return Err(FleetError::invalid_passenger("Name is required."));
    }
    if surname.trim().is_empty() {
        return Err(FleetError::invalid_passenger("Surname is required."));
    }
    Ok(())
}
