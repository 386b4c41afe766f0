//! End-to-end flows through the registry, the way an adapter would drive it.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use fleet_core::{AggregateRoot, FleetError};
use fleet_registry::{InMemoryShipRegistry, ShipHandle, ShipStore};
use fleet_vessels::{FuelType, NewPassenger, PassengerShip, Ship, ShipKind, Tank, TankerShip};

fn registry_with_demo_fleet() -> InMemoryShipRegistry {
    let registry = InMemoryShipRegistry::new();
    registry
        .add(
            PassengerShip::new(
                "IMO9224764",
                "Ocean Explorer",
                300.5,
                50.2,
                Vec::<NewPassenger>::new(),
            )
            .unwrap()
            .into(),
        )
        .unwrap();
    registry
        .add(
            TankerShip::new(
                "IMO9829930",
                "Oil Titan",
                400.0,
                60.0,
                [
                    Tank::new(FuelType::Diesel, 100000.0).unwrap(),
                    Tank::new(FuelType::HeavyFuel, 200000.0).unwrap(),
                ],
            )
            .unwrap()
            .into(),
        )
        .unwrap();
    registry
}

#[test]
fn board_list_and_disembark_a_passenger() {
    let registry = registry_with_demo_fleet();
    let ship = registry.get_passenger_ship("IMO9224764").expect("passenger ship");

    let id = ship.write(|s| s.add_passenger("Ann", "Lee")).unwrap();

    let passengers = ship.read(|s| s.get_all_passengers().to_vec());
    assert_eq!(passengers.len(), 1);
    assert_eq!(passengers[0].passenger_id(), id);
    assert_eq!(passengers[0].name(), "Ann");
    assert_eq!(passengers[0].surname(), "Lee");

    ship.write(|s| s.remove_passenger_by_id(id)).unwrap();
    assert!(ship.read(|s| s.get_all_passengers().is_empty()));
    assert_eq!(
        ship.read(|s| s.get_passenger_by_id(id).map(|p| p.name().to_owned())),
        Err(FleetError::PassengerNotFound(id))
    );
}

#[test]
fn fill_and_drain_a_tank_through_the_registry() {
    let registry = registry_with_demo_fleet();
    let tanker = registry.get_tanker_ship("IMO9829930").expect("tanker");
    let tank_id = tanker.read(|s| s.get_all_tanks()[0].tank_id());

    tanker.write(|s| s.fill_tank(tank_id, 40000.0)).unwrap();
    tanker.write(|s| s.fill_tank(tank_id, 60000.0)).unwrap();
    assert!(matches!(
        tanker.write(|s| s.fill_tank(tank_id, 1.0)),
        Err(FleetError::TankOverfill { .. })
    ));

    assert_eq!(tanker.write(|s| s.empty_tank(tank_id)).unwrap(), 100000.0);
    assert_eq!(
        tanker.write(|s| s.empty_tank(tank_id)).unwrap_err(),
        FleetError::TankAlreadyEmpty(tank_id)
    );
    assert_eq!(tanker.read(|s| s.version()), 3);
}

#[test]
fn generic_lookup_then_dispatch_on_variant() {
    let registry = registry_with_demo_fleet();

    for handle in registry.get_all() {
        match &handle {
            ShipHandle::Passenger(h) => assert_eq!(h.read(|s| s.kind()), ShipKind::Passenger),
            ShipHandle::Tanker(h) => assert_eq!(h.read(|s| s.tank_count()), 2),
        }
    }

    let err = registry.get_by_imo("IMO9074729").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.kind(), "ship_not_found");
}

#[test]
fn concurrent_boarding_on_one_ship_loses_no_updates() {
    let registry = Arc::new(registry_with_demo_fleet());

    thread::scope(|scope| {
        for worker in 0..8 {
            let registry = Arc::clone(&registry);
            scope.spawn(move || {
                let ship = registry.get_passenger_ship("IMO9224764").unwrap();
                for n in 0..25 {
                    ship.write(|s| s.add_passenger(&format!("P{worker}"), &format!("N{n}")))
                        .unwrap();
                }
            });
        }
    });

    let ship = registry.get_passenger_ship("IMO9224764").unwrap();
    ship.read(|s| {
        assert_eq!(s.passenger_count(), 200);
        assert_eq!(s.get_all_passengers().len(), 200);
        assert_eq!(s.version(), 200);
    });
}

#[test]
fn writer_on_one_ship_does_not_block_readers_of_another() {
    let registry = registry_with_demo_fleet();
    let explorer = registry.get_passenger_ship("IMO9224764").unwrap();
    let titan = registry.get_tanker_ship("IMO9829930").unwrap();

    let (entered_tx, entered_rx) = mpsc::channel();
    let (read_tx, read_rx) = mpsc::channel();

    thread::scope(|scope| {
        let writer = explorer.clone();
        scope.spawn(move || {
            writer.write(|s| {
                entered_tx.send(()).unwrap();
                // Hold the write lock until the other ship has been read.
                let tanks = read_rx
                    .recv_timeout(Duration::from_secs(5))
                    .expect("tanker read blocked by passenger ship writer");
                assert_eq!(tanks, 2);
                s.add_passenger("Ann", "Lee")
            })
            .unwrap();
        });

        scope.spawn(move || {
            entered_rx.recv().unwrap();
            let tanks = titan.read(|s| s.tank_count());
            read_tx.send(tanks).unwrap();
        });
    });

    assert_eq!(explorer.read(|s| s.passenger_count()), 1);
}

#[test]
fn concurrent_registration_of_same_imo_admits_exactly_one() {
    let registry = Arc::new(InMemoryShipRegistry::new());

    let outcomes: Vec<bool> = thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    let ship = PassengerShip::new(
                        "IMO9224764",
                        "Ocean Explorer",
                        300.5,
                        50.2,
                        Vec::<NewPassenger>::new(),
                    )
                    .unwrap();
                    registry.add(ship.into()).is_ok()
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn invalid_ships_never_reach_the_registry() {
    let attempts: [Result<Ship, FleetError>; 3] = [
        PassengerShip::new("IMO9224765", "Bad Check", 10.0, 10.0, Vec::<NewPassenger>::new())
            .map(Ship::from),
        PassengerShip::new("IMO9224764", " ", 10.0, 10.0, Vec::<NewPassenger>::new())
            .map(Ship::from),
        TankerShip::new("IMO9829930", "Short", 1.0, 10.0, Vec::<Tank>::new()).map(Ship::from),
    ];

    let registry = InMemoryShipRegistry::new();
    let mut kinds = Vec::new();
    for attempt in attempts {
        match attempt {
            Ok(ship) => {
                registry.add(ship).unwrap();
            }
            Err(err) => kinds.push(err.kind()),
        }
    }

    assert_eq!(
        kinds,
        ["invalid_imo_number", "invalid_ship_name", "invalid_ship_length"]
    );
    assert!(registry.is_empty());
}
