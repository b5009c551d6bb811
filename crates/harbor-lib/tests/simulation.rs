use std::path::PathBuf;

use harbor_lib::{
    Action, CapacityLimit, Error, Outcome, Rejection, Scenario, Simulation,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/scenario.json")
}

#[test]
fn demo_scenario_sails_with_both_containers() {
    let (simulation, records) =
        Simulation::run_scenario(&Scenario::demo()).expect("scenario runs");

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.outcome.is_applied()));

    let distance = simulation.ports().distance(1, 2).unwrap();
    let report = simulation.report();
    let vessel = &report.vessels["1"];
    assert_eq!(vessel.fuel_left, 1000.0 - distance * 1.5);
    assert_eq!(vessel.cargo_ids, vec![1, 2]);
    assert_eq!(report.ports[&1u64].lat, 50.0);
    assert_eq!(report.ports[&2u64].lon, 40.0);
    assert_eq!(simulation.locate("1"), Some(2));
}

#[test]
fn fixture_scenario_reports_each_outcome() {
    let scenario = Scenario::from_path(&fixture_path()).expect("fixture loads");
    let (simulation, records) = Simulation::run_scenario(&scenario).expect("scenario runs");

    let outcomes: Vec<_> = records.iter().map(|r| r.outcome.clone()).collect();
    assert_eq!(outcomes[0], Outcome::Applied);
    assert_eq!(outcomes[1], Outcome::Applied);
    assert_eq!(
        outcomes[2],
        Outcome::Rejected(Rejection::CapacityExceeded {
            limit: CapacityLimit::RefrigeratedContainers { max: 1 }
        })
    );
    assert_eq!(outcomes[3], Outcome::Applied);
    assert!(matches!(
        outcomes[4],
        Outcome::Rejected(Rejection::InsufficientFuel { .. })
    ));
    assert!(outcomes[5..].iter().all(Outcome::is_applied));

    let coaster = simulation.vessel("Coaster").unwrap();
    assert_eq!(coaster.fuel(), 5.0);
    assert_eq!(coaster.current_port(), Some(2));
    assert_eq!(coaster.cargo_ids(), vec![1, 2]);

    let ship = simulation.vessel("Ship_001").unwrap();
    assert_eq!(ship.fuel(), 1000.0);
    assert_eq!(ship.cargo_ids(), vec![11]);

    let port2 = simulation.ports().get(2).unwrap();
    assert_eq!(
        port2.current(),
        ["Ship_001".to_string(), "Coaster".to_string()]
    );
    assert_eq!(
        simulation.ports().get(1).unwrap().history(),
        ["Coaster".to_string()]
    );
}

#[test]
fn unknown_ids_in_actions_are_errors() {
    let mut simulation = Simulation::from_scenario(&Scenario::demo()).unwrap();

    let err = simulation
        .apply(&Action::Load {
            vessel: "nope".to_string(),
            cargo: 1,
        })
        .unwrap_err();
    assert!(matches!(err, Error::UnknownVessel { .. }));

    let err = simulation
        .apply(&Action::Load {
            vessel: "1".to_string(),
            cargo: 99,
        })
        .unwrap_err();
    assert!(matches!(err, Error::UnknownCargo { id: 99 }));

    let err = simulation
        .apply(&Action::Sail {
            vessel: "1".to_string(),
            to: 7,
        })
        .unwrap_err();
    assert!(matches!(err, Error::UnknownPort { id: 7 }));
}

fn two_vessels_one_unit() -> Scenario {
    r#"{
        "ports": [{ "id": 1, "latitude": 0.0, "longitude": 0.0 }],
        "vessels": [
            { "id": "A", "class": "medium", "port": 1 },
            { "id": "B", "class": "medium", "port": 1 }
        ],
        "cargo": [{ "category": "heavy", "id": 7, "weight": 500.0 }]
    }"#
    .parse()
    .unwrap()
}

fn load(vessel: &str, cargo: u64) -> Action {
    Action::Load {
        vessel: vessel.to_string(),
        cargo,
    }
}

#[test]
fn unit_is_aboard_at_most_one_vessel() {
    let mut simulation = Simulation::from_scenario(&two_vessels_one_unit()).unwrap();

    assert_eq!(simulation.apply(&load("A", 7)).unwrap(), Outcome::Applied);
    assert_eq!(
        simulation.apply(&load("B", 7)).unwrap(),
        Outcome::Rejected(Rejection::AlreadyAboard {
            id: 7,
            vessel: "A".to_string()
        })
    );
    assert_eq!(simulation.vessel("A").unwrap().cargo_ids(), vec![7]);
    assert!(simulation.vessel("B").unwrap().cargo_ids().is_empty());
    assert_eq!(simulation.carrier(7), Some("A"));

    let unload = Action::Unload {
        vessel: "A".to_string(),
        cargo: 7,
    };
    assert_eq!(simulation.apply(&unload).unwrap(), Outcome::Applied);
    assert_eq!(simulation.carrier(7), None);
    assert_eq!(simulation.apply(&load("B", 7)).unwrap(), Outcome::Applied);
    assert_eq!(simulation.carrier(7), Some("B"));
}

#[test]
fn loading_same_unit_twice_onto_one_vessel_is_refused() {
    let mut simulation = Simulation::from_scenario(&two_vessels_one_unit()).unwrap();

    assert!(simulation.apply(&load("A", 7)).unwrap().is_applied());
    assert!(matches!(
        simulation.apply(&load("A", 7)).unwrap(),
        Outcome::Rejected(Rejection::AlreadyAboard { id: 7, .. })
    ));
    assert_eq!(simulation.vessel("A").unwrap().cargo_ids(), vec![7]);

    let unload_first = Action::UnloadFirst {
        vessel: "A".to_string(),
    };
    assert!(simulation.apply(&unload_first).unwrap().is_applied());
    assert!(simulation.apply(&load("A", 7)).unwrap().is_applied());
}

#[test]
fn unload_actions_report_missing_cargo() {
    let mut simulation = Simulation::from_scenario(&Scenario::demo()).unwrap();

    let outcome = simulation
        .apply(&Action::UnloadFirst {
            vessel: "1".to_string(),
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Rejected(Rejection::HoldEmpty));

    let outcome = simulation
        .apply(&Action::Unload {
            vessel: "1".to_string(),
            cargo: 2,
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Rejected(Rejection::UnitNotFound { id: 2 }));
}

#[test]
fn undocked_vessels_can_be_docked_by_action() {
    let json = r#"{
        "ports": [{ "id": 1, "latitude": 0.0, "longitude": 0.0 }],
        "vessels": [{ "id": "L", "class": "lightweight" }],
        "actions": [
            { "action": "dock", "vessel": "L", "port": 1 },
            { "action": "refuel", "vessel": "L", "amount": 25.0 }
        ]
    }"#;
    let scenario: Scenario = json.parse().unwrap();
    let (simulation, _) = Simulation::run_scenario(&scenario).unwrap();

    let vessel = simulation.vessel("L").unwrap();
    assert_eq!(vessel.current_port(), Some(1));
    assert_eq!(vessel.fuel(), 525.0);
}

#[test]
fn duplicate_vessels_are_rejected() {
    let json = r#"{
        "vessels": [
            { "id": "A", "class": "medium" },
            { "id": "A", "class": "heavy" }
        ]
    }"#;
    let scenario: Scenario = json.parse().unwrap();
    let err = Simulation::from_scenario(&scenario).unwrap_err();
    assert!(matches!(err, Error::DuplicateVessel { .. }));
}
