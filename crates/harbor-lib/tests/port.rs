use harbor_lib::{CapacityModel, Port, PortDirectory, Vessel};

#[test]
fn arrival_is_idempotent() {
    let mut port = Port::new(1, 50.0, 30.0);
    port.register_arrival("Ship_001");
    port.register_arrival("Ship_001");
    assert_eq!(port.current(), ["Ship_001".to_string()]);
}

#[test]
fn departure_moves_vessel_into_history_once() {
    let mut port = Port::new(1, 50.0, 30.0);

    for _ in 0..3 {
        port.register_arrival("a");
        port.register_departure("a");
    }
    port.register_arrival("b");
    port.register_departure("b");
    port.register_arrival("a");
    port.register_departure("a");

    assert!(port.current().is_empty());
    assert_eq!(port.history(), ["a".to_string(), "b".to_string()]);
}

#[test]
fn departure_keeps_other_residents_in_order() {
    let mut port = Port::new(1, 0.0, 0.0);
    port.register_arrival("a");
    port.register_arrival("b");
    port.register_arrival("c");
    port.register_departure("b");
    assert_eq!(port.current(), ["a".to_string(), "c".to_string()]);
    assert!(port.is_present("c"));
    assert!(!port.is_present("b"));
}

#[test]
fn directory_locates_vessels_and_measures_distance() {
    let mut ports = PortDirectory::new();
    ports.insert(Port::new(1, 0.0, 0.0)).unwrap();
    ports.insert(Port::new(2, 3.0, 4.0)).unwrap();

    let mut vessel = Vessel::new("a", 10.0, CapacityModel::Weight { max_weight: 100.0 }, 1.0)
        .unwrap();
    vessel.dock_at(&mut ports, 2).unwrap();
    assert_eq!(ports.locate("a"), Some(2));
    assert_eq!(vessel.current_port(), Some(2));
    assert_eq!(ports.locate("b"), None);
    assert_eq!(ports.distance(1, 2).unwrap(), 5.0);
    assert!(ports.distance(1, 9).is_err());

    let ids: Vec<_> = ports.iter().map(Port::id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn docked_vessel_stays_in_one_port() {
    let mut ports = PortDirectory::new();
    ports.insert(Port::new(1, 0.0, 0.0)).unwrap();
    ports.insert(Port::new(2, 3.0, 4.0)).unwrap();

    let mut vessel = Vessel::new("v", 10.0, CapacityModel::Weight { max_weight: 100.0 }, 1.0)
        .unwrap();
    vessel.dock_at(&mut ports, 1).unwrap();
    assert!(vessel.dock_at(&mut ports, 2).is_err());

    assert!(vessel.sail_to(&mut ports, 2).unwrap());
    let residents: Vec<_> = ports.iter().filter(|port| port.is_present("v")).map(Port::id).collect();
    assert_eq!(residents, vec![2]);
    assert_eq!(ports.locate("v"), vessel.current_port());
}
